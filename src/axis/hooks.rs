//! Customization hooks accepted by the axis kinds.
//!
//! Hooks are opaque pure functions supplied by the host: the engine calls
//! them, never inspects them. All of them are shared `Arc` closures so an
//! axis config can be rebuilt from overrides without re-creating the hooks.

use std::sync::Arc;

use crate::axis::types::{AxisRange, AxisTick};
use crate::core::Bounding;
use crate::data::{DataSource, TimeWeight, VisibleRange};

/// Value transform between two axis value spaces (value↔real↔display).
pub type ValueTransform = Arc<dyn Fn(f64, &AxisRange) -> f64 + Send + Sync>;

/// Smallest meaningful span for a given display precision.
pub type MinSpanFn = Arc<dyn Fn(i32) -> f64 + Send + Sync>;

/// `(value, precision) -> text` label formatter.
pub type FormatValueFn = Arc<dyn Fn(f64, i32) -> String + Send + Sync>;

/// `(timestamp_ms, weight) -> text` time label formatter.
pub type FormatDateFn = Arc<dyn Fn(i64, TimeWeight) -> String + Send + Sync>;

/// Inputs handed to a range-shaping hook.
pub struct RangeShapeParams<'a> {
    pub visible_range: VisibleRange,
    /// Range computed from the scanned data before shaping.
    pub default_range: AxisRange,
    pub provider: &'a dyn DataSource,
}

/// Remaps the scanned `{min, max}` into a different working range (log,
/// percentage, ...). Post-shaping rules (widening, padding) still apply.
pub type CreateRangeFn = Arc<dyn Fn(RangeShapeParams<'_>) -> AxisRange + Send + Sync>;

/// Inputs handed to a tick-shaping hook.
pub struct TickShapeParams<'a> {
    pub range: AxisRange,
    pub bounding: Bounding,
    /// Ticks the engine generated before shaping.
    pub default_ticks: &'a [AxisTick],
}

/// Replaces the generated tick list.
pub type CreateTicksFn = Arc<dyn Fn(TickShapeParams<'_>) -> Vec<AxisTick> + Send + Sync>;
