use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::figure::{FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{LineType, PolygonStyle, PolygonType, is_transparent};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonAttrs {
    pub coordinates: Vec<Coordinate>,
}

/// Even-odd ray-casting test over the ordered vertex ring.
///
/// Area-based shape: no tolerance, and the result is independent of which
/// vertex starts the ring.
#[must_use]
pub fn check_coordinate_on_polygon(coordinate: Coordinate, attrs: &[PolygonAttrs]) -> bool {
    for polygon in attrs {
        let coordinates = &polygon.coordinates;
        if coordinates.is_empty() {
            continue;
        }

        let mut on = false;
        let mut j = coordinates.len() - 1;
        for i in 0..coordinates.len() {
            if (coordinates[i].y > coordinate.y) != (coordinates[j].y > coordinate.y)
                && coordinate.x
                    < (coordinates[j].x - coordinates[i].x) * (coordinate.y - coordinates[i].y)
                        / (coordinates[j].y - coordinates[i].y)
                        + coordinates[i].x
            {
                on = !on;
            }
            j = i;
        }
        if on {
            return true;
        }
    }
    false
}

pub fn draw_polygon(surface: &mut dyn DrawSurface, attrs: &[PolygonAttrs], styles: &PolygonStyle) {
    if matches!(styles.style, PolygonType::Fill | PolygonType::StrokeFill)
        && !is_transparent(&styles.color)
    {
        surface.set_fill_color(&styles.color);
        for polygon in attrs {
            let coordinates = &polygon.coordinates;
            if coordinates.is_empty() {
                continue;
            }
            surface.begin_path();
            surface.move_to(coordinates[0].x, coordinates[0].y);
            for coordinate in coordinates.iter().skip(1) {
                surface.line_to(coordinate.x, coordinate.y);
            }
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
        for polygon in attrs {
            let coordinates = &polygon.coordinates;
            if coordinates.is_empty() {
                continue;
            }
            surface.begin_path();
            surface.move_to(coordinates[0].x, coordinates[0].y);
            for coordinate in coordinates.iter().skip(1) {
                surface.line_to(coordinate.x, coordinate.y);
            }
            surface.close_path();
            surface.stroke();
        }
    }
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "polygon",
        |surface, attrs: &[PolygonAttrs], styles: &PolygonStyle| {
            draw_polygon(surface, attrs, styles);
        },
        |coordinate, attrs, _styles| check_coordinate_on_polygon(coordinate, attrs),
    )
}
