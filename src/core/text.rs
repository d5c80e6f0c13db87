//! Deterministic text measurement.
//!
//! The core never touches a real font stack; hit boxes and axis sizing use a
//! glyph-width estimate so results are identical on every platform and in
//! headless tests. Rendering backends are free to measure precisely — the
//! estimate only has to be generous enough that labels are never clipped.

/// Estimated pixel width of `text` rendered at `size` pixels.
#[must_use]
pub fn calc_text_width(text: &str, size: f64) -> f64 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }

    let units: f64 = text.chars().map(char_width_units).sum();
    (units * size).ceil()
}

/// Line height for a font size, matching the single-line box the figure
/// renderer reserves.
#[must_use]
pub fn text_line_height(size: f64) -> f64 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }
    size
}

fn char_width_units(ch: char) -> f64 {
    match ch {
        'i' | 'l' | 'j' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.32,
        ' ' => 0.3,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.85,
        _ if ch.is_ascii() => 0.6,
        // CJK and other full-width glyphs.
        _ => 1.0,
    }
}
