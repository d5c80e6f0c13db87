use tracing::trace;

use crate::axis::mapper;
use crate::axis::types::{AxisRange, AxisTick};
use crate::core::Bounding;
use crate::data::DataSource;
use crate::style::ChartStyles;

/// Read-only inputs an axis pulls from the surrounding chart on every
/// recomputation.
#[derive(Clone, Copy)]
pub struct AxisContext<'a> {
    pub provider: &'a dyn DataSource,
    pub styles: &'a ChartStyles,
}

/// Capability set that turns the generic engine into a concrete axis kind.
///
/// Axis kinds are selected by composition: the engine owns the memoization
/// state machine and delegates range/tick/size computation here. All methods
/// are pure with respect to the engine — they read the context and return
/// values, never touch engine state.
pub trait AxisSpec {
    /// Whether low range values map to low pixel offsets.
    fn flip(&self) -> bool;

    /// Pixel extent of the axis inside its bounding box.
    fn axis_length(&self, bounding: Bounding) -> f64;

    fn value_to_real(&self, value: f64, range: &AxisRange) -> f64 {
        let _ = range;
        value
    }

    fn real_to_value(&self, real: f64, range: &AxisRange) -> f64 {
        let _ = range;
        real
    }

    fn create_range(&self, ctx: AxisContext<'_>, bounding: Bounding) -> AxisRange;

    fn create_ticks(
        &self,
        ctx: AxisContext<'_>,
        bounding: Bounding,
        range: &AxisRange,
    ) -> Vec<AxisTick>;

    /// Content-driven cross-axis size (width for a vertical axis, height for
    /// a horizontal one).
    fn auto_size(&self, ctx: AxisContext<'_>, range: &AxisRange, ticks: &[AxisTick]) -> f64;
}

/// Memoizing range/tick engine generic over an [`AxisSpec`].
///
/// The range and tick list are owned exclusively by the engine and replaced
/// wholesale; the previous range is retained only for change detection.
#[derive(Debug)]
pub struct AxisEngine<S> {
    spec: S,
    bounding: Bounding,
    range: AxisRange,
    prev_range: AxisRange,
    ticks: Vec<AxisTick>,
    auto_calc_tick: bool,
}

impl<S: AxisSpec> AxisEngine<S> {
    #[must_use]
    pub fn new(spec: S) -> Self {
        Self {
            spec,
            bounding: Bounding::default(),
            range: AxisRange::default(),
            prev_range: AxisRange::default(),
            ticks: Vec::new(),
            auto_calc_tick: true,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &S {
        &self.spec
    }

    pub fn set_bounding(&mut self, bounding: Bounding) {
        self.bounding = bounding;
    }

    #[must_use]
    pub fn bounding(&self) -> Bounding {
        self.bounding
    }

    /// Recomputes the range (when auto-calculation is on) and regenerates the
    /// tick list when the range boundaries changed or `force` is set.
    ///
    /// Returns whether the tick list changed. Idempotent: repeated calls with
    /// unchanged inputs are no-ops returning `false`.
    pub fn build_ticks(&mut self, force: bool, ctx: AxisContext<'_>) -> bool {
        if self.auto_calc_tick {
            self.range = self.spec.create_range(ctx, self.bounding);
        }
        if self.prev_range.from != self.range.from || self.prev_range.to != self.range.to || force {
            self.prev_range = self.range;
            self.ticks = self.spec.create_ticks(ctx, self.bounding, &self.range);
            trace!(
                from = self.range.from,
                to = self.range.to,
                ticks = self.ticks.len(),
                "rebuilt axis ticks"
            );
            return true;
        }
        false
    }

    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// Installs an explicit range and disables auto-calculation until
    /// [`Self::set_auto_calc_tick_flag`] re-enables it.
    pub fn set_range(&mut self, range: AxisRange) {
        self.auto_calc_tick = false;
        self.range = range;
    }

    #[must_use]
    pub fn auto_calc_tick_flag(&self) -> bool {
        self.auto_calc_tick
    }

    pub fn set_auto_calc_tick_flag(&mut self, flag: bool) {
        self.auto_calc_tick = flag;
    }

    #[must_use]
    pub fn convert_to_pixel(&self, value: f64) -> f64 {
        let real = self.spec.value_to_real(value, &self.range);
        mapper::to_pixel(
            real,
            &self.range,
            self.spec.axis_length(self.bounding),
            self.spec.flip(),
        )
    }

    #[must_use]
    pub fn convert_from_pixel(&self, pixel: f64) -> f64 {
        let real = mapper::from_pixel(
            pixel,
            &self.range,
            self.spec.axis_length(self.bounding),
            self.spec.flip(),
        );
        self.spec.real_to_value(real, &self.range)
    }

    /// Pixel conversion clamped into the inner 5%–98% band of the axis.
    #[must_use]
    pub fn convert_to_clamped_pixel(&self, value: f64) -> f64 {
        let real = self.spec.value_to_real(value, &self.range);
        mapper::to_clamped_pixel(
            real,
            &self.range,
            self.spec.axis_length(self.bounding),
            self.spec.flip(),
        )
    }

    /// Cross-axis size needed so the axis never clips its decorations or the
    /// crosshair readout.
    #[must_use]
    pub fn auto_size(&self, ctx: AxisContext<'_>) -> f64 {
        self.spec.auto_size(ctx, &self.range, &self.ticks)
    }

    pub(crate) fn spec_mut(&mut self) -> &mut S {
        &mut self.spec
    }
}
