use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::figure::{DEVIATION, FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{LineType, SmoothLineStyle};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineAttrs {
    pub coordinates: Vec<Coordinate>,
}

/// Slope and intercept of the line through two points, `None` for a vertical
/// line.
#[must_use]
pub fn get_linear_slope_intercept(
    coordinate1: Coordinate,
    coordinate2: Coordinate,
) -> Option<(f64, f64)> {
    let dif_x = coordinate1.x - coordinate2.x;
    if dif_x != 0.0 {
        let k = (coordinate1.y - coordinate2.y) / dif_x;
        let b = coordinate1.y - k * coordinate1.x;
        Some((k, b))
    } else {
        None
    }
}

/// `y` of the line at the target's `x`; a vertical line echoes the target's
/// own `y`.
#[must_use]
pub fn get_linear_y_from_slope_intercept(kb: Option<(f64, f64)>, coordinate: Coordinate) -> f64 {
    match kb {
        Some((k, b)) => coordinate.x * k + b,
        None => coordinate.y,
    }
}

#[must_use]
pub fn get_linear_y_from_coordinates(
    coordinate1: Coordinate,
    coordinate2: Coordinate,
    target: Coordinate,
) -> f64 {
    get_linear_y_from_slope_intercept(get_linear_slope_intercept(coordinate1, coordinate2), target)
}

/// Segment-distance hit test without a square root, tuned to match on-screen
/// line thickness.
///
/// For each consecutive pair: a vertical segment hits when the summed
/// y-offsets stay within `2·DEVIATION` of the segment length and the
/// x-offset is under `DEVIATION`; other segments project the point onto the
/// line and bound the squared vertical residual normalized by `slope² + 1`.
#[must_use]
pub fn check_coordinate_on_line(coordinate: Coordinate, attrs: &[LineAttrs]) -> bool {
    for line in attrs {
        let coordinates = &line.coordinates;
        if coordinates.len() < 2 {
            continue;
        }
        for pair in coordinates.windows(2) {
            let prev = pair[0];
            let current = pair[1];

            if prev.x == current.x {
                if (prev.y - coordinate.y).abs() + (current.y - coordinate.y).abs()
                    - (prev.y - current.y).abs()
                    < DEVIATION + DEVIATION
                    && (coordinate.x - prev.x).abs() < DEVIATION
                {
                    return true;
                }
            } else {
                let Some(kb) = get_linear_slope_intercept(prev, current) else {
                    continue;
                };
                let y = get_linear_y_from_slope_intercept(Some(kb), coordinate);
                let y_dif = (y - coordinate.y).abs();
                if (prev.x - coordinate.x).abs() + (current.x - coordinate.x).abs()
                    - (prev.x - current.x).abs()
                    < DEVIATION + DEVIATION
                    && y_dif * y_dif / (kb.0 * kb.0 + 1.0) < DEVIATION * DEVIATION
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Appends the poly-line path after the caller's `move_to`, optionally as
/// clamped bezier segments.
pub fn line_to(surface: &mut dyn DrawSurface, coordinates: &[Coordinate], smooth: f64) {
    let length = coordinates.len();
    if smooth > 0.0 && length > 2 {
        let mut cpx0 = coordinates[0].x;
        let mut cpy0 = coordinates[0].y;
        for i in 1..length - 1 {
            let prev = coordinates[i - 1];
            let current = coordinates[i];
            let next = coordinates[i + 1];

            let dx01 = current.x - prev.x;
            let dy01 = current.y - prev.y;
            let dx12 = next.x - current.x;
            let dy12 = next.y - current.y;
            let mut dx02 = next.x - prev.x;
            let mut dy02 = next.y - prev.y;
            let prev_segment_length = (dx01 * dx01 + dy01 * dy01).sqrt();
            let next_segment_length = (dx12 * dx12 + dy12 * dy12).sqrt();
            let segment_length_ratio =
                next_segment_length / (next_segment_length + prev_segment_length);

            let mut next_cpx = current.x + dx02 * smooth * segment_length_ratio;
            let mut next_cpy = current.y + dy02 * smooth * segment_length_ratio;

            // Control points stay inside each segment's bounding box so the
            // curve never overshoots a data point.
            next_cpx = next_cpx.min(next.x.max(current.x)).max(next.x.min(current.x));
            next_cpy = next_cpy.min(next.y.max(current.y)).max(next.y.min(current.y));

            dx02 = next_cpx - current.x;
            dy02 = next_cpy - current.y;

            let mut cpx1 = current.x - dx02 * prev_segment_length / next_segment_length;
            let mut cpy1 = current.y - dy02 * prev_segment_length / next_segment_length;

            cpx1 = cpx1.min(prev.x.max(current.x)).max(prev.x.min(current.x));
            cpy1 = cpy1.min(prev.y.max(current.y)).max(prev.y.min(current.y));

            dx02 = current.x - cpx1;
            dy02 = current.y - cpy1;
            next_cpx = current.x + dx02 * next_segment_length / prev_segment_length;
            next_cpy = current.y + dy02 * next_segment_length / prev_segment_length;

            surface.bezier_curve_to(cpx0, cpy0, cpx1, cpy1, current.x, current.y);

            cpx0 = next_cpx;
            cpy0 = next_cpy;
        }
        let last = coordinates[length - 1];
        surface.bezier_curve_to(cpx0, cpy0, last.x, last.y, last.x, last.y);
    } else {
        for coordinate in coordinates.iter().skip(1) {
            surface.line_to(coordinate.x, coordinate.y);
        }
    }
}

pub fn draw_line(surface: &mut dyn DrawSurface, attrs: &[LineAttrs], styles: &SmoothLineStyle) {
    let size = styles.line.size;
    surface.set_line_width(size);
    surface.set_stroke_color(&styles.line.color);
    if styles.line.style == LineType::Dashed {
        surface.set_line_dash(&styles.line.dashed_value);
    } else {
        surface.set_line_dash(&[]);
    }

    let smooth = styles.smooth.factor();
    // Odd stroke widths land between pixels without a half-pixel shift.
    let correction = if is_odd_width(size) { 0.5 } else { 0.0 };

    for line in attrs {
        let coordinates = &line.coordinates;
        if coordinates.len() < 2 {
            continue;
        }

        let axis_aligned = coordinates.len() == 2
            && (coordinates[0].x == coordinates[1].x || coordinates[0].y == coordinates[1].y);
        if axis_aligned {
            surface.begin_path();
            if coordinates[0].x == coordinates[1].x {
                surface.move_to(coordinates[0].x + correction, coordinates[0].y);
                surface.line_to(coordinates[1].x + correction, coordinates[1].y);
            } else {
                surface.move_to(coordinates[0].x, coordinates[0].y + correction);
                surface.line_to(coordinates[1].x, coordinates[1].y + correction);
            }
            surface.stroke();
            surface.close_path();
        } else {
            surface.save();
            if correction > 0.0 {
                surface.translate(0.5, 0.5);
            }
            surface.begin_path();
            surface.move_to(coordinates[0].x, coordinates[0].y);
            line_to(surface, coordinates, smooth);
            surface.stroke();
            surface.close_path();
            surface.restore();
        }
    }
}

pub(crate) fn is_odd_width(size: f64) -> bool {
    size.fract() == 0.0 && (size as i64).rem_euclid(2) == 1
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "line",
        |surface, attrs: &[LineAttrs], styles: &SmoothLineStyle| draw_line(surface, attrs, styles),
        |coordinate, attrs, _styles| check_coordinate_on_line(coordinate, attrs),
    )
}
