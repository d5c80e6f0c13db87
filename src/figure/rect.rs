use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::figure::{DEVIATION, FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{LineType, PolygonType, RectStyle, is_transparent};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectAttrs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Point-in-box test with each dimension widened to at least `2·DEVIATION`
/// centered on the original edge, so zero-width/height rects stay clickable.
#[must_use]
pub fn check_coordinate_on_rect(coordinate: Coordinate, attrs: &[RectAttrs]) -> bool {
    for rect in attrs {
        let mut x = rect.x;
        let mut width = rect.width;
        if width < DEVIATION * 2.0 {
            x -= DEVIATION;
            width = DEVIATION * 2.0;
        }

        let mut y = rect.y;
        let mut height = rect.height;
        if height < DEVIATION * 2.0 {
            y -= DEVIATION;
            height = DEVIATION * 2.0;
        }

        if coordinate.x >= x
            && coordinate.x <= x + width
            && coordinate.y >= y
            && coordinate.y <= y + height
        {
            return true;
        }
    }
    false
}

pub fn draw_rect(surface: &mut dyn DrawSurface, attrs: &[RectAttrs], styles: &RectStyle) {
    let solid = matches!(styles.style, PolygonType::Fill | PolygonType::StrokeFill)
        && !is_transparent(&styles.color);

    if solid {
        surface.set_fill_color(&styles.color);
        for rect in attrs {
            surface.begin_path();
            surface.rect_path(rect.x, rect.y, rect.width, rect.height, styles.border_radius);
            surface.close_path();
            surface.fill();
        }
    }

    if matches!(styles.style, PolygonType::Stroke | PolygonType::StrokeFill)
        && styles.border_size > 0.0
        && !is_transparent(&styles.border_color)
    {
        surface.set_stroke_color(&styles.border_color);
        surface.set_fill_color(&styles.border_color);
        surface.set_line_width(styles.border_size);
        if styles.border_style == LineType::Dashed {
            surface.set_line_dash(&styles.border_dashed_value);
        } else {
            surface.set_line_dash(&[]);
        }

        let correction: f64 = if crate::figure::line::is_odd_width(styles.border_size) {
            0.5
        } else {
            0.0
        };
        let double_correction = (correction * 2.0).round();

        for rect in attrs {
            if rect.width > styles.border_size * 2.0 && rect.height > styles.border_size * 2.0 {
                surface.begin_path();
                surface.rect_path(
                    rect.x + correction,
                    rect.y + correction,
                    rect.width - double_correction,
                    rect.height - double_correction,
                    styles.border_radius,
                );
                surface.close_path();
                surface.stroke();
            } else if !solid {
                // Too small to stroke a ring; paint the whole box instead.
                surface.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
        }
    }
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "rect",
        |surface, attrs: &[RectAttrs], styles: &RectStyle| draw_rect(surface, attrs, styles),
        |coordinate, attrs, _styles| check_coordinate_on_rect(coordinate, attrs),
    )
}

#[cfg(test)]
mod tests {
    use super::{RectAttrs, check_coordinate_on_rect};
    use crate::core::Coordinate;
    use crate::figure::DEVIATION;

    #[test]
    fn zero_size_rect_is_clickable_within_deviation() {
        let rect = RectAttrs {
            x: 10.0,
            y: 10.0,
            width: 0.0,
            height: 0.0,
        };
        assert!(check_coordinate_on_rect(
            Coordinate::new(10.0, 10.0),
            &[rect]
        ));
        assert!(check_coordinate_on_rect(
            Coordinate::new(10.0, 10.0 + DEVIATION),
            &[rect]
        ));
        assert!(!check_coordinate_on_rect(
            Coordinate::new(10.0, 10.0 + DEVIATION + 1.0),
            &[rect]
        ));
    }

    #[test]
    fn regular_rect_uses_exact_bounds() {
        let rect = RectAttrs {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 10.0,
        };
        assert!(check_coordinate_on_rect(
            Coordinate::new(20.0, 10.0),
            &[rect]
        ));
        assert!(!check_coordinate_on_rect(
            Coordinate::new(20.1, 10.0),
            &[rect]
        ));
    }
}
