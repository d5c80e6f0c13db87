//! Opaque paint and decoration configuration.
//!
//! Everything here is plain read-only data: the core consumes these values
//! for hit boxes and axis sizing, and forwards them untouched to draw
//! procedures. Hosts construct them once (usually by deserializing a theme)
//! and never mutate them in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonType {
    #[default]
    Fill,
    Stroke,
    StrokeFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Start,
    Right,
    End,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Top,
    Hanging,
    Bottom,
    Ideographic,
    Alphabetic,
    Middle,
}

/// Stroke configuration shared by line-like figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineStyle {
    pub style: LineType,
    pub size: f64,
    pub color: String,
    pub dashed_value: Vec<f64>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            style: LineType::Solid,
            size: 1.0,
            color: "currentColor".to_owned(),
            dashed_value: vec![2.0, 2.0],
        }
    }
}

/// Smoothing control: either an on/off flag or an explicit 0..1 factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Smooth {
    Flag(bool),
    Factor(f64),
}

impl Default for Smooth {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl Smooth {
    /// Effective bezier factor; out-of-range factors fall back to no smoothing.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Flag(true) => 0.5,
            Self::Flag(false) => 0.0,
            Self::Factor(value) => {
                if value > 0.0 && value < 1.0 {
                    value
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothLineStyle {
    #[serde(flatten)]
    pub line: LineStyle,
    #[serde(default)]
    pub smooth: Smooth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolygonStyle {
    pub style: PolygonType,
    pub color: String,
    pub border_size: f64,
    pub border_color: String,
    pub border_style: LineType,
    pub border_dashed_value: Vec<f64>,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            style: PolygonType::Fill,
            color: "currentColor".to_owned(),
            border_size: 1.0,
            border_color: "currentColor".to_owned(),
            border_style: LineType::Solid,
            border_dashed_value: vec![2.0, 2.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RectStyle {
    pub style: PolygonType,
    pub color: String,
    pub border_size: f64,
    pub border_color: String,
    pub border_style: LineType,
    pub border_radius: f64,
    pub border_dashed_value: Vec<f64>,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            style: PolygonType::Fill,
            color: "transparent".to_owned(),
            border_size: 1.0,
            border_color: "transparent".to_owned(),
            border_style: LineType::Solid,
            border_radius: 0.0,
            border_dashed_value: vec![2.0, 2.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub style: PolygonType,
    pub color: String,
    pub size: f64,
    pub family: String,
    pub weight: String,
    pub padding_left: f64,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub background_color: String,
    pub border_size: f64,
    pub border_color: String,
    pub border_style: LineType,
    pub border_radius: f64,
    pub border_dashed_value: Vec<f64>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            style: PolygonType::Fill,
            color: "currentColor".to_owned(),
            size: 12.0,
            family: "Helvetica Neue".to_owned(),
            weight: "normal".to_owned(),
            padding_left: 0.0,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            background_color: "transparent".to_owned(),
            border_size: 0.0,
            border_color: "transparent".to_owned(),
            border_style: LineType::Solid,
            border_radius: 0.0,
            border_dashed_value: vec![2.0, 2.0],
        }
    }
}

impl TextStyle {
    /// Rect style used for the label's background box.
    #[must_use]
    pub fn background_rect_style(&self) -> RectStyle {
        RectStyle {
            style: self.style,
            color: self.background_color.clone(),
            border_size: self.border_size,
            border_color: self.border_color.clone(),
            border_style: self.border_style,
            border_radius: self.border_radius,
            border_dashed_value: self.border_dashed_value.clone(),
        }
    }
}

/// Primary-series presentation kinds; only `Area` changes how the value axis
/// scans its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandleKind {
    #[default]
    CandleSolid,
    CandleStroke,
    CandleUpStroke,
    CandleDownStroke,
    Ohlc,
    Area,
}

impl CandleKind {
    #[must_use]
    pub fn is_area(self) -> bool {
        matches!(self, Self::Area)
    }
}

/// Record field a figure or range scan reads from a candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleField {
    Open,
    High,
    Low,
    #[default]
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandleStyles {
    pub kind: CandleKind,
    pub area_value_field: CandleField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisLineStyles {
    pub show: bool,
    pub color: String,
    pub size: f64,
}

impl Default for AxisLineStyles {
    fn default() -> Self {
        Self {
            show: true,
            color: "#DDDDDD".to_owned(),
            size: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickLineStyles {
    pub show: bool,
    pub color: String,
    pub size: f64,
    pub length: f64,
}

impl Default for TickLineStyles {
    fn default() -> Self {
        Self {
            show: true,
            color: "#DDDDDD".to_owned(),
            size: 1.0,
            length: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickTextStyles {
    pub show: bool,
    pub color: String,
    pub size: f64,
    pub family: String,
    pub weight: String,
    pub margin_start: f64,
    pub margin_end: f64,
}

impl Default for TickTextStyles {
    fn default() -> Self {
        Self {
            show: true,
            color: "#76808F".to_owned(),
            size: 12.0,
            family: "Helvetica Neue".to_owned(),
            weight: "normal".to_owned(),
            margin_start: 4.0,
            margin_end: 4.0,
        }
    }
}

/// Decoration configuration for one axis.
///
/// `size: None` means "auto": the engine derives the cross-axis extent from
/// the visible decorations and the crosshair label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisStyles {
    pub show: bool,
    pub size: Option<f64>,
    pub axis_line: AxisLineStyles,
    pub tick_line: TickLineStyles,
    pub tick_text: TickTextStyles,
}

impl Default for AxisStyles {
    fn default() -> Self {
        Self {
            show: true,
            size: None,
            axis_line: AxisLineStyles::default(),
            tick_line: TickLineStyles::default(),
            tick_text: TickTextStyles::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrosshairTextStyles {
    pub show: bool,
    pub color: String,
    pub size: f64,
    pub family: String,
    pub weight: String,
    pub border_size: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for CrosshairTextStyles {
    fn default() -> Self {
        Self {
            show: true,
            color: "#FFFFFF".to_owned(),
            size: 12.0,
            family: "Helvetica Neue".to_owned(),
            weight: "normal".to_owned(),
            border_size: 1.0,
            padding_left: 4.0,
            padding_right: 4.0,
            padding_top: 4.0,
            padding_bottom: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrosshairDirectionStyles {
    pub show: bool,
    pub text: CrosshairTextStyles,
}

impl Default for CrosshairDirectionStyles {
    fn default() -> Self {
        Self {
            show: true,
            text: CrosshairTextStyles::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrosshairStyles {
    pub show: bool,
    pub horizontal: CrosshairDirectionStyles,
    pub vertical: CrosshairDirectionStyles,
}

impl Default for CrosshairStyles {
    fn default() -> Self {
        Self {
            show: true,
            horizontal: CrosshairDirectionStyles::default(),
            vertical: CrosshairDirectionStyles::default(),
        }
    }
}

/// Aggregated read-only style tree consumed by the axis engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyles {
    pub candle: CandleStyles,
    pub x_axis: AxisStyles,
    pub y_axis: AxisStyles,
    pub crosshair: CrosshairStyles,
}

/// Whether a CSS-ish color string paints nothing.
#[must_use]
pub fn is_transparent(color: &str) -> bool {
    let color = color.trim();
    if color.is_empty()
        || color.eq_ignore_ascii_case("transparent")
        || color.eq_ignore_ascii_case("none")
    {
        return true;
    }

    if let Some(body) = color
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        if let Some(alpha) = body.rsplit(',').next() {
            if let Ok(alpha) = alpha.trim().parse::<f64>() {
                return alpha == 0.0;
            }
        }
    }

    // #RRGGBBAA with a zero alpha byte.
    if color.len() == 9 && color.starts_with('#') {
        return color.ends_with("00");
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{LineStyle, Smooth, is_transparent};

    #[test]
    fn transparent_colors_are_detected() {
        assert!(is_transparent("transparent"));
        assert!(is_transparent("none"));
        assert!(is_transparent("rgba(10, 20, 30, 0)"));
        assert!(is_transparent("#11223300"));
        assert!(!is_transparent("#112233FF"));
        assert!(!is_transparent("currentColor"));
    }

    #[test]
    fn smooth_factor_clamps_out_of_range_values() {
        assert_eq!(Smooth::Flag(true).factor(), 0.5);
        assert_eq!(Smooth::Flag(false).factor(), 0.0);
        assert_eq!(Smooth::Factor(0.25).factor(), 0.25);
        assert_eq!(Smooth::Factor(1.5).factor(), 0.0);
    }

    #[test]
    fn partial_style_payloads_fall_back_to_defaults() {
        let style: LineStyle = serde_json::from_str(r#"{"size": 2.0}"#).expect("decode");
        assert_eq!(style.size, 2.0);
        assert_eq!(style.color, "currentColor");
        assert_eq!(style.dashed_value, vec![2.0, 2.0]);
    }
}
