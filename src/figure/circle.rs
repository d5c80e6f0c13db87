use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::figure::{FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{LineType, PolygonStyle, PolygonType, is_transparent};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleAttrs {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Hit when the point lies inside or on any circle.
///
/// The boundary is inclusive; no extra tolerance since the shape already has
/// area.
#[must_use]
pub fn check_coordinate_on_circle(coordinate: Coordinate, attrs: &[CircleAttrs]) -> bool {
    attrs.iter().any(|circle| {
        let dx = coordinate.x - circle.x;
        let dy = coordinate.y - circle.y;
        dx * dx + dy * dy <= circle.r * circle.r
    })
}

pub fn draw_circle(surface: &mut dyn DrawSurface, attrs: &[CircleAttrs], styles: &PolygonStyle) {
    let solid = matches!(styles.style, PolygonType::Fill | PolygonType::StrokeFill)
        && !is_transparent(&styles.color);

    if solid {
        surface.set_fill_color(&styles.color);
        for circle in attrs {
            surface.begin_path();
            surface.arc(circle.x, circle.y, circle.r, 0.0, PI * 2.0);
            surface.close_path();
            surface.fill();
        }
    }

    if matches!(styles.style, PolygonType::Stroke | PolygonType::StrokeFill)
        && styles.border_size > 0.0
        && !is_transparent(&styles.border_color)
    {
        surface.set_stroke_color(&styles.border_color);
        surface.set_line_width(styles.border_size);
        if styles.border_style == LineType::Dashed {
            surface.set_line_dash(&styles.border_dashed_value);
        } else {
            surface.set_line_dash(&[]);
        }
        for circle in attrs {
            // A border thicker than the disc would paint over the whole fill.
            if !solid || circle.r > styles.border_size {
                surface.begin_path();
                surface.arc(circle.x, circle.y, circle.r, 0.0, PI * 2.0);
                surface.close_path();
                surface.stroke();
            }
        }
    }
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "circle",
        |surface, attrs: &[CircleAttrs], styles: &PolygonStyle| draw_circle(surface, attrs, styles),
        |coordinate, attrs, _styles| check_coordinate_on_circle(coordinate, attrs),
    )
}
