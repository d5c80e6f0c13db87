use kline_core::axis::{AxisContext, TimeAxis, TimeAxisEngine, ValueAxis, ValueAxisEngine};
use kline_core::core::Bounding;
use kline_core::core::text::calc_text_width;
use kline_core::data::{KLineData, VecDataSource};
use kline_core::style::ChartStyles;

fn source() -> VecDataSource {
    VecDataSource::new().with_candles(vec![
        KLineData::new(0, 10.0, 20.0, 10.0, 20.0),
        KLineData::new(1, 5.0, 25.0, 5.0, 25.0),
    ])
}

#[test]
fn value_axis_auto_width_covers_decorations_and_crosshair_label() {
    let source = source();
    let styles = ChartStyles::default();
    let mut engine = ValueAxisEngine::new(ValueAxis::new());
    engine.set_bounding(Bounding::from_size(100.0, 500.0));
    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    let width = engine.auto_size(AxisContext {
        provider: &source,
        styles: &styles,
    });

    let widest_label = engine
        .ticks()
        .iter()
        .map(|tick| calc_text_width(&tick.text, styles.y_axis.tick_text.size))
        .fold(0.0_f64, f64::max);
    let decoration_width = styles.y_axis.axis_line.size
        + styles.y_axis.tick_line.length
        + styles.y_axis.tick_text.margin_start
        + styles.y_axis.tick_text.margin_end
        + widest_label;
    assert!(width >= decoration_width);

    // And never smaller than the crosshair readout box.
    let label = &styles.crosshair.horizontal.text;
    let crosshair_floor = label.padding_left + label.padding_right + label.border_size * 2.0;
    assert!(width > crosshair_floor);
}

#[test]
fn explicit_axis_size_bypasses_auto_measurement() {
    let source = source();
    let mut styles = ChartStyles::default();
    styles.y_axis.size = Some(64.0);

    let mut engine = ValueAxisEngine::new(ValueAxis::new());
    engine.set_bounding(Bounding::from_size(100.0, 500.0));
    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert_eq!(
        engine.auto_size(AxisContext {
            provider: &source,
            styles: &styles,
        }),
        64.0
    );
}

#[test]
fn hidden_decorations_shrink_the_value_axis() {
    let source = source();
    let mut styles = ChartStyles::default();
    styles.y_axis.show = false;
    styles.crosshair.show = false;

    let mut engine = ValueAxisEngine::new(ValueAxis::new());
    engine.set_bounding(Bounding::from_size(100.0, 500.0));
    engine.build_ticks(false, AxisContext {
        provider: &source,
        styles: &styles,
    });

    assert_eq!(
        engine.auto_size(AxisContext {
            provider: &source,
            styles: &styles,
        }),
        0.0
    );
}

#[test]
fn time_axis_auto_height_is_max_of_decorations_and_crosshair() {
    let source = source();
    let styles = ChartStyles::default();
    let engine = TimeAxisEngine::new(TimeAxis::new());

    let height = engine.auto_size(AxisContext {
        provider: &source,
        styles: &styles,
    });

    // axis line 1 + tick length 3 + margins 4 + 4 + text 12 = 24;
    // crosshair label 4 + 4 + 2·1 + 12 = 22.
    assert_eq!(height, 24.0);

    let mut hidden = ChartStyles::default();
    hidden.x_axis.show = false;
    let crosshair_only = engine.auto_size(AxisContext {
        provider: &source,
        styles: &hidden,
    });
    assert_eq!(crosshair_only, 22.0);
}
