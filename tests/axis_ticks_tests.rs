use std::sync::Arc;

use kline_core::axis::{
    AxisContext, AxisGap, AxisTick, TickValue, TimeAxis, TimeAxisEngine, TimeAxisOverride,
    ValueAxis, ValueAxisEngine, ValueAxisOverride,
};
use kline_core::core::Bounding;
use kline_core::data::{KLineData, SeriesBinding, TimeTick, TimeWeight, VecDataSource, VisibleRange};
use kline_core::style::ChartStyles;
use smallvec::smallvec;

fn candle(low: f64, high: f64) -> KLineData {
    KLineData::new(0, low, high, low, high)
}

fn value_engine(height: f64) -> ValueAxisEngine {
    let spec = ValueAxis::new().with_override(ValueAxisOverride {
        gap: Some(AxisGap {
            top: 0.0,
            bottom: 0.0,
        }),
        ..Default::default()
    });
    let mut engine = ValueAxisEngine::new(spec);
    engine.set_bounding(Bounding::from_size(100.0, height));
    engine
}

#[test]
fn value_ticks_land_on_nice_interval_multiples() {
    let source = VecDataSource::new()
        .with_candles(vec![candle(0.0, 10.0)])
        .with_price_precision(0);
    let styles = ChartStyles::default();
    let mut engine = value_engine(500.0);

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    let ticks = engine.ticks();
    assert!(!ticks.is_empty());
    // displayRange 10 / 8 -> nice interval 1; edge ticks 0 and 10 fall outside
    // the label-height margins.
    let values: Vec<f64> = ticks
        .iter()
        .map(|tick| match tick.value {
            TickValue::Number(value) => value,
            TickValue::Timestamp(_) => panic!("value axis tick"),
        })
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(ticks[0].text, "1");
    // Vertical axis: growing values move toward the top of the pane.
    assert!(ticks[0].coord > ticks[8].coord);
}

#[test]
fn value_tick_labels_honor_price_precision() {
    let source = VecDataSource::new()
        .with_candles(vec![candle(0.0, 10.0)])
        .with_price_precision(2);
    let styles = ChartStyles::default();
    let mut engine = value_engine(500.0);

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert_eq!(engine.ticks()[0].text, "1.00");
}

#[test]
fn value_tick_labels_group_thousands() {
    let source = VecDataSource::new()
        .with_candles(vec![candle(0.0, 80_000.0)])
        .with_price_precision(0);
    let styles = ChartStyles::default();
    let mut engine = value_engine(500.0);

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    let grouped = engine
        .ticks()
        .iter()
        .filter(|tick| tick.text.contains(','))
        .count();
    assert!(grouped > 0, "labels above 1000 carry separators");
}

#[test]
fn indicator_pane_labels_fold_big_numbers() {
    let binding = SeriesBinding {
        precision: 2,
        should_format_big_number: true,
        outputs: vec![smallvec![Some(0.0)], smallvec![Some(8_000_000.0)]],
        ..SeriesBinding::default()
    };
    let source = VecDataSource::new()
        .with_candles(vec![candle(1.0, 1.0), candle(1.0, 1.0)])
        .with_series_binding(binding);
    let styles = ChartStyles::default();

    let spec = ValueAxis::new().with_override(ValueAxisOverride {
        in_candle_pane: Some(false),
        gap: Some(AxisGap {
            top: 0.0,
            bottom: 0.0,
        }),
        ..Default::default()
    });
    let mut engine = ValueAxisEngine::new(spec);
    engine.set_bounding(Bounding::from_size(100.0, 500.0));
    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert!(
        engine.ticks().iter().any(|tick| tick.text.ends_with('M')),
        "million-scale labels use the big-number form"
    );
}

#[test]
fn overlapping_labels_are_dropped_on_short_axes() {
    let source = VecDataSource::new()
        .with_candles(vec![candle(0.0, 10.0)])
        .with_price_precision(0);
    let styles = ChartStyles::default();

    let mut tall = value_engine(500.0);
    tall.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });
    let mut short = value_engine(100.0);
    short.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert!(short.ticks().len() < tall.ticks().len());
    // Accepted ticks keep at least two label heights of spacing.
    let label_height = styles.x_axis.tick_text.size;
    for pair in short.ticks().windows(2) {
        assert!((pair[0].coord - pair[1].coord).abs() > label_height * 2.0);
    }
}

#[test]
fn tick_shaping_hook_replaces_generated_ticks() {
    let source = VecDataSource::new().with_candles(vec![candle(0.0, 10.0)]);
    let styles = ChartStyles::default();

    let spec = ValueAxis::new().with_override(ValueAxisOverride {
        gap: Some(AxisGap {
            top: 0.0,
            bottom: 0.0,
        }),
        create_ticks: Some(Arc::new(|params| {
            vec![AxisTick {
                coord: params.bounding.height / 2.0,
                value: TickValue::Number(params.range.display_to),
                text: "top".to_owned(),
            }]
        })),
        ..Default::default()
    });
    let mut engine = ValueAxisEngine::new(spec);
    engine.set_bounding(Bounding::from_size(100.0, 500.0));
    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert_eq!(engine.ticks().len(), 1);
    assert_eq!(engine.ticks()[0].text, "top");
}

// 2021-07-01T12:30:45Z
const TS: i64 = 1_625_142_645_000;

fn time_source() -> VecDataSource {
    VecDataSource::new()
        .with_visible_range(VisibleRange::new(0, 10))
        .with_time_ticks(vec![
            TimeTick {
                data_index: 0,
                weight: TimeWeight::Year,
                timestamp: TS,
            },
            TimeTick {
                data_index: 9,
                weight: TimeWeight::Minute,
                timestamp: TS + 60_000,
            },
        ])
}

#[test]
fn time_ticks_format_by_weight_and_map_indices() {
    let source = time_source();
    let styles = ChartStyles::default();
    let mut engine = TimeAxisEngine::new(TimeAxis::new());
    engine.set_bounding(Bounding::from_size(900.0, 50.0));

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    let ticks = engine.ticks();
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].text, "2021");
    assert_eq!(ticks[1].text, "12:31");
    assert_eq!(ticks[0].coord, 0.0);
    assert_eq!(ticks[1].coord, 900.0);
    assert_eq!(ticks[0].value, TickValue::Timestamp(TS));
}

#[test]
fn time_axis_range_spans_the_visible_window() {
    let source = time_source();
    let styles = ChartStyles::default();
    let mut engine = TimeAxisEngine::new(TimeAxis::new());
    engine.set_bounding(Bounding::from_size(900.0, 50.0));

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    let range = engine.range();
    assert_eq!(range.from, 0.0);
    assert_eq!(range.to, 9.0);
    assert_eq!(range.real_range, range.real_to - range.real_from);
}

#[test]
fn custom_date_formatter_overrides_default_tiers() {
    let source = time_source();
    let styles = ChartStyles::default();

    let spec = TimeAxis::new().with_override(TimeAxisOverride {
        format_date: Some(Arc::new(|_, weight| format!("{weight:?}"))),
        ..Default::default()
    });
    let mut engine = TimeAxisEngine::new(spec);
    engine.set_bounding(Bounding::from_size(900.0, 50.0));

    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert_eq!(engine.ticks()[0].text, "Year");
    assert_eq!(engine.ticks()[1].text, "Minute");
}
