use chrono::{DateTime, Utc};

use crate::axis::engine::{AxisContext, AxisEngine, AxisSpec};
use crate::axis::hooks::{CreateTicksFn, FormatDateFn, TickShapeParams};
use crate::axis::types::{AxisRange, AxisTick, TickValue};
use crate::core::Bounding;
use crate::data::TimeWeight;

/// Horizontal time/category axis.
///
/// The range is the visible index window and ticks arrive pre-computed from
/// the store; this axis only picks a label format per weight tier and lays
/// the ticks out in pixels.
pub struct TimeAxis {
    reverse: bool,
    scroll_zoom_enabled: bool,
    format_date: Option<FormatDateFn>,
    create_ticks: Option<CreateTicksFn>,
}

/// Engine driving a [`TimeAxis`].
pub type TimeAxisEngine = AxisEngine<TimeAxis>;

impl Default for TimeAxis {
    fn default() -> Self {
        Self {
            reverse: false,
            scroll_zoom_enabled: true,
            format_date: None,
            create_ticks: None,
        }
    }
}

/// Partial reconfiguration of a [`TimeAxis`].
#[derive(Default)]
pub struct TimeAxisOverride {
    pub reverse: Option<bool>,
    pub scroll_zoom_enabled: Option<bool>,
    pub format_date: Option<FormatDateFn>,
    pub create_ticks: Option<CreateTicksFn>,
}

impl TimeAxis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_override(self, overrides: TimeAxisOverride) -> Self {
        Self {
            reverse: overrides.reverse.unwrap_or(self.reverse),
            scroll_zoom_enabled: overrides
                .scroll_zoom_enabled
                .unwrap_or(self.scroll_zoom_enabled),
            format_date: overrides.format_date.or(self.format_date),
            create_ticks: overrides.create_ticks.or(self.create_ticks),
        }
    }

    #[must_use]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub fn scroll_zoom_enabled(&self) -> bool {
        self.scroll_zoom_enabled
    }

    #[must_use]
    pub fn with_format_date(mut self, format_date: FormatDateFn) -> Self {
        self.format_date = Some(format_date);
        self
    }

    fn format_tick(&self, timestamp: i64, weight: TimeWeight) -> String {
        match &self.format_date {
            Some(hook) => hook(timestamp, weight),
            None => format_timestamp_by_weight(timestamp, weight),
        }
    }
}

impl std::fmt::Debug for TimeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeAxis")
            .field("reverse", &self.reverse)
            .field("scroll_zoom_enabled", &self.scroll_zoom_enabled)
            .finish_non_exhaustive()
    }
}

impl AxisSpec for TimeAxis {
    fn flip(&self) -> bool {
        !self.reverse
    }

    fn axis_length(&self, bounding: Bounding) -> f64 {
        bounding.width
    }

    fn create_range(&self, ctx: AxisContext<'_>, _bounding: Bounding) -> AxisRange {
        let visible = ctx.provider.visible_range();
        // Inclusive index interval: the last visible slot is `to - 1`.
        let from = visible.from as f64;
        let to = (visible.to - 1) as f64;
        AxisRange::uniform(from, to)
    }

    fn create_ticks(
        &self,
        ctx: AxisContext<'_>,
        bounding: Bounding,
        range: &AxisRange,
    ) -> Vec<AxisTick> {
        let length = self.axis_length(bounding);
        let ticks: Vec<AxisTick> = ctx
            .provider
            .time_ticks()
            .iter()
            .map(|tick| AxisTick {
                coord: crate::axis::mapper::to_pixel(
                    tick.data_index as f64,
                    range,
                    length,
                    self.flip(),
                ),
                value: TickValue::Timestamp(tick.timestamp),
                text: self.format_tick(tick.timestamp, tick.weight),
            })
            .collect();

        match &self.create_ticks {
            Some(hook) => hook(TickShapeParams {
                range: *range,
                bounding,
                default_ticks: &ticks,
            }),
            None => ticks,
        }
    }

    fn auto_size(&self, ctx: AxisContext<'_>, _range: &AxisRange, _ticks: &[AxisTick]) -> f64 {
        let styles = ctx.styles;
        let axis_styles = &styles.x_axis;
        if let Some(size) = axis_styles.size {
            return size;
        }

        let mut height = 0.0;
        if axis_styles.show {
            if axis_styles.axis_line.show {
                height += axis_styles.axis_line.size;
            }
            if axis_styles.tick_line.show {
                height += axis_styles.tick_line.length;
            }
            if axis_styles.tick_text.show {
                height += axis_styles.tick_text.margin_start
                    + axis_styles.tick_text.margin_end
                    + axis_styles.tick_text.size;
            }
        }

        let crosshair = &styles.crosshair;
        let mut crosshair_label_height = 0.0;
        if crosshair.show && crosshair.vertical.show && crosshair.vertical.text.show {
            let label = &crosshair.vertical.text;
            crosshair_label_height = label.padding_top
                + label.padding_bottom
                + label.border_size * 2.0
                + label.size;
        }

        height.max(crosshair_label_height)
    }
}

impl AxisEngine<TimeAxis> {
    /// Rebuilds the axis config from the current one plus `overrides`.
    pub fn apply_override(&mut self, overrides: TimeAxisOverride) {
        let spec = std::mem::take(self.spec_mut());
        *self.spec_mut() = spec.with_override(overrides);
    }

    /// Pixel offset of a timestamp, resolved through the visible tick list's
    /// nearest record.
    #[must_use]
    pub fn convert_timestamp_to_pixel(&self, timestamp: i64, ctx: AxisContext<'_>) -> Option<f64> {
        nearest_visible_index(ctx, timestamp).map(|index| self.convert_to_pixel(index as f64))
    }

    /// Timestamp of the record nearest to a pixel offset.
    #[must_use]
    pub fn convert_timestamp_from_pixel(&self, pixel: f64, ctx: AxisContext<'_>) -> Option<i64> {
        let index = self.convert_from_pixel(pixel).round() as i64;
        ctx.provider
            .visible_data()
            .iter()
            .filter_map(|candle| candle.data.map(|data| (candle.data_index, data.timestamp)))
            .min_by_key(|(data_index, _)| (data_index - index).abs())
            .map(|(_, timestamp)| timestamp)
    }
}

fn nearest_visible_index(ctx: AxisContext<'_>, timestamp: i64) -> Option<i64> {
    ctx.provider
        .visible_data()
        .iter()
        .filter_map(|candle| candle.data.map(|data| (candle.data_index, data.timestamp)))
        .min_by_key(|(_, candidate)| (candidate - timestamp).abs())
        .map(|(data_index, _)| data_index)
}

/// Default weight-tier label formats, rendered in UTC.
#[must_use]
pub fn format_timestamp_by_weight(timestamp_ms: i64, weight: TimeWeight) -> String {
    let datetime: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_default();
    let pattern = match weight {
        TimeWeight::Year => "%Y",
        TimeWeight::Month => "%Y-%m",
        TimeWeight::Day => "%m-%d",
        TimeWeight::Hour | TimeWeight::Minute => "%H:%M",
        TimeWeight::Second => "%H:%M:%S",
    };
    datetime.format(pattern).to_string()
}
