use std::sync::Arc;

use crate::axis::engine::{AxisContext, AxisEngine, AxisSpec};
use crate::axis::hooks::{
    CreateRangeFn, CreateTicksFn, FormatValueFn, MinSpanFn, RangeShapeParams, TickShapeParams,
    ValueTransform,
};
use crate::axis::mapper;
use crate::axis::types::{AxisGap, AxisPosition, AxisRange, AxisTick, TickValue};
use crate::core::Bounding;
use crate::core::format::{format_big_number, format_fold_decimal, format_precision, format_thousands};
use crate::core::numeric::{nice, pow10, precision_of, round_to};
use crate::core::text::calc_text_width;

const TICK_COUNT: f64 = 8.0;

/// Vertical value axis.
///
/// Scans the visible window (primary OHLC/area values plus every bound
/// auxiliary series) for its range, then lays out human-readable ticks at a
/// nice interval. All behavior knobs live here; the shared state machine is
/// [`AxisEngine`].
pub struct ValueAxis {
    position: AxisPosition,
    reverse: bool,
    inside: bool,
    in_candle_pane: bool,
    gap: AxisGap,
    value_to_real: ValueTransform,
    real_to_value: ValueTransform,
    real_to_display: ValueTransform,
    display_to_real: ValueTransform,
    min_span: MinSpanFn,
    display_value_to_text: FormatValueFn,
    create_range: Option<CreateRangeFn>,
    create_ticks: Option<CreateTicksFn>,
}

/// Engine driving a [`ValueAxis`].
pub type ValueAxisEngine = AxisEngine<ValueAxis>;

impl Default for ValueAxis {
    fn default() -> Self {
        Self {
            position: AxisPosition::Right,
            reverse: false,
            inside: false,
            in_candle_pane: true,
            gap: AxisGap::default(),
            value_to_real: identity_transform(),
            real_to_value: identity_transform(),
            real_to_display: identity_transform(),
            display_to_real: identity_transform(),
            min_span: Arc::new(|precision| pow10(-precision)),
            display_value_to_text: Arc::new(format_precision),
            create_range: None,
            create_ticks: None,
        }
    }
}

fn identity_transform() -> ValueTransform {
    Arc::new(|value, _range| value)
}

/// Partial reconfiguration of a [`ValueAxis`].
///
/// Unset fields keep the current value; applying an override builds a new
/// immutable config rather than patching fields in place.
#[derive(Default)]
pub struct ValueAxisOverride {
    pub position: Option<AxisPosition>,
    pub reverse: Option<bool>,
    pub inside: Option<bool>,
    pub in_candle_pane: Option<bool>,
    pub gap: Option<AxisGap>,
    pub value_to_real: Option<ValueTransform>,
    pub real_to_value: Option<ValueTransform>,
    pub real_to_display: Option<ValueTransform>,
    pub display_to_real: Option<ValueTransform>,
    pub min_span: Option<MinSpanFn>,
    pub display_value_to_text: Option<FormatValueFn>,
    pub create_range: Option<CreateRangeFn>,
    pub create_ticks: Option<CreateTicksFn>,
}

impl ValueAxis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new config from this one plus `overrides`.
    #[must_use]
    pub fn with_override(self, overrides: ValueAxisOverride) -> Self {
        Self {
            position: overrides.position.unwrap_or(self.position),
            reverse: overrides.reverse.unwrap_or(self.reverse),
            inside: overrides.inside.unwrap_or(self.inside),
            in_candle_pane: overrides.in_candle_pane.unwrap_or(self.in_candle_pane),
            gap: overrides.gap.unwrap_or(self.gap),
            value_to_real: overrides.value_to_real.unwrap_or(self.value_to_real),
            real_to_value: overrides.real_to_value.unwrap_or(self.real_to_value),
            real_to_display: overrides.real_to_display.unwrap_or(self.real_to_display),
            display_to_real: overrides.display_to_real.unwrap_or(self.display_to_real),
            min_span: overrides.min_span.unwrap_or(self.min_span),
            display_value_to_text: overrides
                .display_value_to_text
                .unwrap_or(self.display_value_to_text),
            create_range: overrides.create_range.or(self.create_range),
            create_ticks: overrides.create_ticks.or(self.create_ticks),
        }
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    #[must_use]
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    #[must_use]
    pub fn inside(&self) -> bool {
        self.inside
    }

    #[must_use]
    pub fn in_candle_pane(&self) -> bool {
        self.in_candle_pane
    }

    #[must_use]
    pub fn gap(&self) -> AxisGap {
        self.gap
    }

    /// Whether the axis grows away from the pane's zero edge.
    #[must_use]
    pub fn is_from_zero(&self) -> bool {
        (self.position == AxisPosition::Left && self.inside)
            || (self.position == AxisPosition::Right && !self.inside)
    }
}

impl std::fmt::Debug for ValueAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueAxis")
            .field("position", &self.position)
            .field("reverse", &self.reverse)
            .field("inside", &self.inside)
            .field("in_candle_pane", &self.in_candle_pane)
            .field("gap", &self.gap)
            .finish_non_exhaustive()
    }
}

impl AxisSpec for ValueAxis {
    fn flip(&self) -> bool {
        self.reverse
    }

    fn axis_length(&self, bounding: Bounding) -> f64 {
        bounding.height
    }

    fn value_to_real(&self, value: f64, range: &AxisRange) -> f64 {
        (self.value_to_real)(value, range)
    }

    fn real_to_value(&self, real: f64, range: &AxisRange) -> f64 {
        (self.real_to_value)(real, range)
    }

    fn create_range(&self, ctx: AxisContext<'_>, bounding: Bounding) -> AxisRange {
        let provider = ctx.provider;
        let bindings = provider.series_bindings();

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut should_ohlc = false;
        let mut specify_min = f64::INFINITY;
        let mut specify_max = f64::NEG_INFINITY;
        let mut binding_precision = i32::MAX;

        for binding in bindings {
            should_ohlc = should_ohlc || binding.should_ohlc;
            binding_precision = binding_precision.min(binding.precision);
            if let Some(value) = binding.min_value {
                specify_min = specify_min.min(value);
            }
            if let Some(value) = binding.max_value {
                specify_max = specify_max.max(value);
            }
        }

        let precision = if self.in_candle_pane {
            binding_precision.min(provider.price_precision())
        } else if binding_precision != i32::MAX {
            binding_precision
        } else {
            4
        };

        let candle_styles = ctx.styles.candle;
        let is_area = candle_styles.kind.is_area();
        let should_compare_high_low =
            (self.in_candle_pane && !is_area) || (!self.in_candle_pane && should_ohlc);

        for candle in provider.visible_data() {
            if let Some(data) = candle.data {
                if should_compare_high_low {
                    min = min.min(data.low);
                    max = max.max(data.high);
                }
                if self.in_candle_pane && is_area {
                    let value = data.value_of(candle_styles.area_value_field);
                    min = min.min(value);
                    max = max.max(value);
                }
            }
            for binding in bindings {
                if let Some(row) = binding.outputs_at(candle.data_index) {
                    for value in row.iter().flatten() {
                        min = min.min(*value);
                        max = max.max(*value);
                    }
                }
            }
        }

        if min.is_finite() && max.is_finite() {
            min = specify_min.min(min);
            max = specify_max.max(max);
        } else {
            // Nothing visible; a fixed default keeps every downstream value finite.
            min = 0.0;
            max = 10.0;
        }

        let default_range = AxisRange::uniform(min, max);
        let range = match &self.create_range {
            Some(hook) => hook(RangeShapeParams {
                visible_range: provider.visible_range(),
                default_range,
                provider,
            }),
            None => default_range,
        };

        let mut real_from = range.real_from;
        let mut real_to = range.real_to;
        let min_span = (self.min_span)(precision);

        if real_from == real_to || range.real_range < min_span {
            // A bound pinned by a hard series override stays put; the other
            // side absorbs the widening.
            let min_pinned = specify_min == real_from;
            let max_pinned = specify_max == real_to;
            let half_tick_count = TICK_COUNT / 2.0;
            real_from = if min_pinned {
                real_from
            } else if max_pinned {
                real_from - TICK_COUNT * min_span
            } else {
                real_from - half_tick_count * min_span
            };
            real_to = if max_pinned {
                real_to
            } else if min_pinned {
                real_to + TICK_COUNT * min_span
            } else {
                real_to + half_tick_count * min_span
            };
        }

        let height = self.axis_length(bounding);
        let top_rate = gap_rate(self.gap.top, height);
        let bottom_rate = gap_rate(self.gap.bottom, height);
        let real_range = real_to - real_from;
        real_from -= real_range * bottom_rate;
        real_to += real_range * top_rate;

        let from = (self.real_to_value)(real_from, &range);
        let to = (self.real_to_value)(real_to, &range);
        let display_from = (self.real_to_display)(real_from, &range);
        let display_to = (self.real_to_display)(real_to, &range);

        AxisRange {
            from,
            to,
            range: to - from,
            real_from,
            real_to,
            real_range: real_to - real_from,
            display_from,
            display_to,
            display_range: display_to - display_from,
        }
    }

    fn create_ticks(
        &self,
        ctx: AxisContext<'_>,
        bounding: Bounding,
        range: &AxisRange,
    ) -> Vec<AxisTick> {
        let mut raw_values = Vec::new();
        if range.display_range >= 0.0 {
            let interval = nice(range.display_range / TICK_COUNT);
            if interval > 0.0 {
                let tick_precision = precision_of(interval);
                let first = round_to((range.display_from / interval).ceil() * interval, tick_precision);
                let last = round_to((range.display_to / interval).floor() * interval, tick_precision);
                let mut value = first;
                while value <= last {
                    raw_values.push(round_to(value, tick_precision));
                    value += interval;
                }
            }
        }

        let provider = ctx.provider;
        let height = self.axis_length(bounding);

        let mut precision = 0;
        let mut should_format_big_number = false;
        if self.in_candle_pane {
            precision = provider.price_precision();
        } else {
            for binding in provider.series_bindings() {
                precision = precision.max(binding.precision);
                should_format_big_number =
                    should_format_big_number || binding.should_format_big_number;
            }
        }

        let thousands_separator = provider.thousands_separator().to_owned();
        let fold_threshold = provider.decimal_fold_threshold();
        // Label height comes from the horizontal axis's tick text.
        let text_height = ctx.styles.x_axis.tick_text.size;

        let mut ticks = Vec::with_capacity(raw_values.len());
        let mut valid_y: Option<f64> = None;
        for value in raw_values {
            let mut text = (self.display_value_to_text)(value, precision);
            let real = (self.value_to_real)(
                (self.real_to_value)((self.display_to_real)(value, range), range),
                range,
            );
            let y = mapper::to_pixel(real, range, height, self.flip());

            if should_format_big_number {
                text = format_big_number(value);
            }
            text = format_fold_decimal(&format_thousands(&text, &thousands_separator), fold_threshold);

            let spaced = match valid_y {
                Some(previous) => (previous - y).abs() > text_height * 2.0,
                None => true,
            };
            if y > text_height && y < height - text_height && spaced {
                ticks.push(AxisTick {
                    coord: y,
                    value: TickValue::Number(value),
                    text,
                });
                valid_y = Some(y);
            }
        }

        match &self.create_ticks {
            Some(hook) => hook(TickShapeParams {
                range: *range,
                bounding,
                default_ticks: &ticks,
            }),
            None => ticks,
        }
    }

    fn auto_size(&self, ctx: AxisContext<'_>, range: &AxisRange, ticks: &[AxisTick]) -> f64 {
        let styles = ctx.styles;
        let axis_styles = &styles.y_axis;
        if let Some(size) = axis_styles.size {
            return size;
        }

        let mut width = 0.0;
        if axis_styles.show {
            if axis_styles.axis_line.show {
                width += axis_styles.axis_line.size;
            }
            if axis_styles.tick_line.show {
                width += axis_styles.tick_line.length;
            }
            if axis_styles.tick_text.show {
                let mut text_width: f64 = 0.0;
                for tick in ticks {
                    text_width = text_width.max(calc_text_width(&tick.text, axis_styles.tick_text.size));
                }
                width += axis_styles.tick_text.margin_start
                    + axis_styles.tick_text.margin_end
                    + text_width;
            }
        }

        let crosshair = &styles.crosshair;
        let mut crosshair_label_width = 0.0;
        if crosshair.show && crosshair.horizontal.show && crosshair.horizontal.text.show {
            let mut binding_precision = 0;
            let mut should_format_big_number = false;
            for binding in ctx.provider.series_bindings() {
                binding_precision = binding_precision.max(binding.precision);
                should_format_big_number =
                    should_format_big_number || binding.should_format_big_number;
            }

            let precision = if self.in_candle_pane {
                ctx.provider.price_precision()
            } else {
                binding_precision
            };

            let mut value_text = format_precision(range.display_to, precision);
            if should_format_big_number {
                value_text = format_big_number(range.display_to);
            }
            value_text = format_fold_decimal(&value_text, ctx.provider.decimal_fold_threshold());

            let label = &crosshair.horizontal.text;
            crosshair_label_width = label.padding_left
                + label.padding_right
                + label.border_size * 2.0
                + calc_text_width(&value_text, label.size);
        }

        width.max(crosshair_label_width)
    }
}

impl AxisEngine<ValueAxis> {
    /// Rebuilds the axis config from the current one plus `overrides`.
    pub fn apply_override(&mut self, overrides: ValueAxisOverride) {
        let spec = std::mem::take(self.spec_mut());
        *self.spec_mut() = spec.with_override(overrides);
    }
}

/// Gap values ≥ 1 are pixels of axis length; smaller values are already
/// fractions.
fn gap_rate(value: f64, length: f64) -> f64 {
    if value >= 1.0 {
        if length > 0.0 { value / length } else { 0.0 }
    } else {
        value
    }
}
