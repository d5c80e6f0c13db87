use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::core::text::calc_text_width;
use crate::figure::rect::{RectAttrs, draw_rect};
use crate::figure::{FigureTemplate, typed_template};
use crate::render::DrawSurface;
use crate::style::{TextAlign, TextBaseline, TextStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttrs {
    pub x: f64,
    pub y: f64,
    pub text: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default)]
    pub baseline: TextBaseline,
}

/// Bounding box the text occupies, derived from its anchor, alignment,
/// baseline and measured glyph width.
#[must_use]
pub fn get_text_rect(attrs: &TextAttrs, styles: &TextStyle) -> RectAttrs {
    let width = attrs.width.unwrap_or_else(|| {
        styles.padding_left + calc_text_width(&attrs.text, styles.size) + styles.padding_right
    });
    let height = attrs
        .height
        .unwrap_or(styles.padding_top + styles.size + styles.padding_bottom);

    let start_x = match attrs.align {
        TextAlign::Left | TextAlign::Start => attrs.x,
        TextAlign::Right | TextAlign::End => attrs.x - width,
        TextAlign::Center => attrs.x - width / 2.0,
    };
    let start_y = match attrs.baseline {
        TextBaseline::Top | TextBaseline::Hanging => attrs.y,
        TextBaseline::Bottom | TextBaseline::Ideographic | TextBaseline::Alphabetic => {
            attrs.y - height
        }
        TextBaseline::Middle => attrs.y - height / 2.0,
    };

    RectAttrs {
        x: start_x,
        y: start_y,
        width,
        height,
    }
}

/// Rectangle test against each text's derived bounding box.
#[must_use]
pub fn check_coordinate_on_text(
    coordinate: Coordinate,
    attrs: &[TextAttrs],
    styles: &TextStyle,
) -> bool {
    attrs.iter().any(|text| {
        let rect = get_text_rect(text, styles);
        coordinate.x >= rect.x
            && coordinate.x <= rect.x + rect.width
            && coordinate.y >= rect.y
            && coordinate.y <= rect.y + rect.height
    })
}

pub fn draw_text(surface: &mut dyn DrawSurface, attrs: &[TextAttrs], styles: &TextStyle) {
    let rects: Vec<RectAttrs> = attrs.iter().map(|text| get_text_rect(text, styles)).collect();

    // Background boxes first, then glyphs on top.
    draw_rect(surface, &rects, &styles.background_rect_style());

    surface.set_font(styles.size, &styles.weight, &styles.family);
    surface.set_fill_color(&styles.color);

    for (text, rect) in attrs.iter().zip(&rects) {
        surface.fill_text(
            &text.text,
            rect.x + styles.padding_left,
            rect.y + styles.padding_top,
            rect.width - styles.padding_left - styles.padding_right,
        );
    }
}

pub(super) fn template() -> FigureTemplate {
    typed_template(
        "text",
        |surface, attrs: &[TextAttrs], styles: &TextStyle| draw_text(surface, attrs, styles),
        check_coordinate_on_text,
    )
}
