use serde::{Deserialize, Serialize};

/// Immutable snapshot of the interval an axis currently maps to pixels.
///
/// `real_*` is the padded working range used for pixel mapping; `display_*`
/// is what the user sees after the real→display transform. Padding applies
/// only to `real_*`. Instances are replaced wholesale on every
/// recomputation, never mutated field by field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    pub from: f64,
    pub to: f64,
    pub range: f64,
    pub real_from: f64,
    pub real_to: f64,
    pub real_range: f64,
    pub display_from: f64,
    pub display_to: f64,
    pub display_range: f64,
}

impl AxisRange {
    /// Range where every field carries the same interval; the common case
    /// when no transform is installed.
    #[must_use]
    pub fn uniform(from: f64, to: f64) -> Self {
        let span = to - from;
        Self {
            from,
            to,
            range: span,
            real_from: from,
            real_to: to,
            real_range: span,
            display_from: from,
            display_to: to,
            display_range: span,
        }
    }
}

/// Domain value carried by a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickValue {
    /// Value-axis tick: the rounded numeric value.
    Number(f64),
    /// Time-axis tick: the record timestamp in milliseconds.
    Timestamp(i64),
}

/// One labeled reference point on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis.
    pub coord: f64,
    pub value: TickValue,
    /// Rendered label.
    pub text: String,
}

/// Padding fractions applied to the top/bottom (or right/left) of the
/// working range.
///
/// Values ≥ 1 are interpreted as pixels of the axis length and folded into a
/// fraction at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisGap {
    pub top: f64,
    pub bottom: f64,
}

impl Default for AxisGap {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.1,
        }
    }
}

/// Side of the pane a value axis is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    #[default]
    Right,
}
