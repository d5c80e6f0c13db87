use kline_core::core::Coordinate;
use kline_core::figure::{FigureRegistry, LineAttrs, RectAttrs, draw_line, draw_rect};
use kline_core::render::{DrawCommand, RecordingSurface};
use kline_core::style::{LineStyle, PolygonType, RectStyle, SmoothLineStyle, Smooth};
use serde_json::json;

fn two_point_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LineAttrs {
    LineAttrs {
        coordinates: vec![Coordinate::new(x1, y1), Coordinate::new(x2, y2)],
    }
}

#[test]
fn odd_width_axis_aligned_lines_get_half_pixel_correction() {
    let mut surface = RecordingSurface::new();
    let styles = SmoothLineStyle {
        line: LineStyle {
            size: 1.0,
            ..LineStyle::default()
        },
        smooth: Smooth::Flag(false),
    };

    draw_line(&mut surface, &[two_point_line(10.0, 0.0, 10.0, 100.0)], &styles);

    assert!(surface.commands().contains(&DrawCommand::MoveTo { x: 10.5, y: 0.0 }));
    assert!(surface.commands().contains(&DrawCommand::LineTo { x: 10.5, y: 100.0 }));
}

#[test]
fn even_width_lines_are_not_shifted() {
    let mut surface = RecordingSurface::new();
    let styles = SmoothLineStyle {
        line: LineStyle {
            size: 2.0,
            ..LineStyle::default()
        },
        smooth: Smooth::Flag(false),
    };

    draw_line(&mut surface, &[two_point_line(10.0, 0.0, 10.0, 100.0)], &styles);

    assert!(surface.commands().contains(&DrawCommand::MoveTo { x: 10.0, y: 0.0 }));
}

#[test]
fn smoothed_polyline_emits_bezier_segments() {
    let mut surface = RecordingSurface::new();
    let styles = SmoothLineStyle {
        line: LineStyle::default(),
        smooth: Smooth::Flag(true),
    };
    let attrs = LineAttrs {
        coordinates: vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(50.0, 30.0),
            Coordinate::new(100.0, 10.0),
        ],
    };

    draw_line(&mut surface, &[attrs], &styles);

    let beziers = surface
        .commands()
        .iter()
        .filter(|command| matches!(command, DrawCommand::BezierCurveTo { .. }))
        .count();
    assert_eq!(beziers, 2);
}

#[test]
fn dashed_lines_configure_the_dash_pattern() {
    let mut surface = RecordingSurface::new();
    let styles = SmoothLineStyle {
        line: LineStyle {
            style: kline_core::style::LineType::Dashed,
            dashed_value: vec![4.0, 2.0],
            ..LineStyle::default()
        },
        smooth: Smooth::Flag(false),
    };

    draw_line(&mut surface, &[two_point_line(0.0, 0.0, 50.0, 50.0)], &styles);

    assert!(
        surface
            .commands()
            .contains(&DrawCommand::LineDash(vec![4.0, 2.0]))
    );
}

#[test]
fn tiny_stroked_rect_falls_back_to_a_filled_box() {
    let mut surface = RecordingSurface::new();
    let styles = RectStyle {
        style: PolygonType::Stroke,
        border_color: "#FF0000".to_owned(),
        border_size: 2.0,
        ..RectStyle::default()
    };
    let attrs = RectAttrs {
        x: 0.0,
        y: 0.0,
        width: 3.0,
        height: 3.0,
    };

    draw_rect(&mut surface, &[attrs], &styles);

    assert!(surface.commands().iter().any(|command| matches!(
        command,
        DrawCommand::FillRect { width, height, .. } if *width == 3.0 && *height == 3.0
    )));
}

#[test]
fn transparent_fill_skips_paint_operations() {
    let mut surface = RecordingSurface::new();
    let styles = RectStyle::default();
    let attrs = RectAttrs {
        x: 0.0,
        y: 0.0,
        width: 30.0,
        height: 30.0,
    };

    // Default rect style is a transparent fill with a transparent border.
    draw_rect(&mut surface, &[attrs], &styles);
    assert_eq!(surface.paint_count(), 0);
}

#[test]
fn registry_draw_decodes_json_payloads() {
    let registry = FigureRegistry::with_defaults();
    let text = registry.resolve("text").expect("builtin text");
    let mut surface = RecordingSurface::new();

    text.draw(
        &mut surface,
        &json!({"x": 10.0, "y": 10.0, "text": "42"}),
        &json!({"size": 14.0}),
    )
    .expect("draw succeeds");

    assert!(surface.commands().iter().any(|command| matches!(
        command,
        DrawCommand::FillText { text, .. } if text == "42"
    )));
    assert!(surface.commands().iter().any(|command| matches!(
        command,
        DrawCommand::Font { size, .. } if *size == 14.0
    )));
}

#[test]
fn registry_draw_rejects_undecodable_attrs() {
    let registry = FigureRegistry::with_defaults();
    let circle = registry.resolve("circle").expect("builtin circle");
    let mut surface = RecordingSurface::new();

    let result = circle.draw(&mut surface, &json!({"radius": "big"}), &json!({}));
    assert!(result.is_err());
}
