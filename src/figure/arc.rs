use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, distance};
use crate::figure::{DEVIATION, FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{LineStyle, LineType};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcAttrs {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Hit when the point sits within `DEVIATION` of the circular locus and
/// inside the angular span's bounding box (padded by `DEVIATION`).
#[must_use]
pub fn check_coordinate_on_arc(coordinate: Coordinate, attrs: &[ArcAttrs]) -> bool {
    for arc in attrs {
        let center = Coordinate::new(arc.x, arc.y);
        if (distance(coordinate, center) - arc.r).abs() < DEVIATION {
            let start_x = arc.r * arc.start_angle.cos() + arc.x;
            let start_y = arc.r * arc.start_angle.sin() + arc.y;
            let end_x = arc.r * arc.end_angle.cos() + arc.x;
            let end_y = arc.r * arc.end_angle.sin() + arc.y;

            if coordinate.x <= start_x.max(end_x) + DEVIATION
                && coordinate.x >= start_x.min(end_x) - DEVIATION
                && coordinate.y <= start_y.max(end_y) + DEVIATION
                && coordinate.y >= start_y.min(end_y) - DEVIATION
            {
                return true;
            }
        }
    }
    false
}

pub fn draw_arc(surface: &mut dyn DrawSurface, attrs: &[ArcAttrs], styles: &LineStyle) {
    surface.set_line_width(styles.size);
    surface.set_stroke_color(&styles.color);
    if styles.style == LineType::Dashed {
        surface.set_line_dash(&styles.dashed_value);
    } else {
        surface.set_line_dash(&[]);
    }

    for arc in attrs {
        surface.begin_path();
        surface.arc(arc.x, arc.y, arc.r, arc.start_angle, arc.end_angle);
        surface.stroke();
        surface.close_path();
    }
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "arc",
        |surface, attrs: &[ArcAttrs], styles: &LineStyle| draw_arc(surface, attrs, styles),
        |coordinate, attrs, _styles| check_coordinate_on_arc(coordinate, attrs),
    )
}
