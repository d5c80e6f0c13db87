//! Pure value↔pixel mapping.
//!
//! Both directions are total functions parameterized by an [`AxisRange`] and
//! the axis pixel length. `flip` selects which end of the axis carries the
//! low end of the range: a vertical axis maps high values to low pixels
//! unless reversed, a horizontal one does the opposite. Callers are expected
//! to have run the range through the engine's widening step so
//! `real_range > 0`; a zero span still never divides by zero here.

use crate::axis::types::AxisRange;

/// Maps a real-domain value to a rounded pixel offset.
#[must_use]
pub fn to_pixel(real: f64, range: &AxisRange, length: f64, flip: bool) -> f64 {
    let rate = if range.real_range == 0.0 {
        0.0
    } else {
        (real - range.real_from) / range.real_range
    };
    let pixel = if flip {
        rate * length
    } else {
        (1.0 - rate) * length
    };
    pixel.round()
}

/// Exact algebraic inverse of [`to_pixel`] up to pixel rounding.
#[must_use]
pub fn from_pixel(pixel: f64, range: &AxisRange, length: f64, flip: bool) -> f64 {
    if length == 0.0 {
        return range.real_from;
    }
    let rate = if flip {
        pixel / length
    } else {
        1.0 - pixel / length
    };
    rate * range.real_range + range.real_from
}

/// Like [`to_pixel`] but clamped into the inner 5%–98% of the axis so
/// overlay labels never touch the edges.
#[must_use]
pub fn to_clamped_pixel(real: f64, range: &AxisRange, length: f64, flip: bool) -> f64 {
    let pixel = to_pixel(real, range, length, flip);
    (length * 0.05).max(pixel.min(length * 0.98)).round()
}

#[cfg(test)]
mod tests {
    use super::{from_pixel, to_clamped_pixel, to_pixel};
    use crate::axis::types::AxisRange;

    #[test]
    fn vertical_axis_maps_high_values_to_low_pixels() {
        let range = AxisRange::uniform(0.0, 100.0);
        assert_eq!(to_pixel(100.0, &range, 500.0, false), 0.0);
        assert_eq!(to_pixel(0.0, &range, 500.0, false), 500.0);
        assert_eq!(to_pixel(50.0, &range, 500.0, false), 250.0);
    }

    #[test]
    fn flipped_axis_maps_low_values_to_low_pixels() {
        let range = AxisRange::uniform(0.0, 100.0);
        assert_eq!(to_pixel(0.0, &range, 500.0, true), 0.0);
        assert_eq!(to_pixel(100.0, &range, 500.0, true), 500.0);
    }

    #[test]
    fn zero_span_does_not_divide_by_zero() {
        let range = AxisRange::uniform(5.0, 5.0);
        let pixel = to_pixel(5.0, &range, 500.0, false);
        assert!(pixel.is_finite());
        assert!(from_pixel(pixel, &range, 500.0, false).is_finite());
    }

    #[test]
    fn clamped_pixel_stays_inside_inner_band() {
        let range = AxisRange::uniform(0.0, 100.0);
        assert_eq!(to_clamped_pixel(100.0, &range, 500.0, false), 25.0);
        assert_eq!(to_clamped_pixel(0.0, &range, 500.0, false), 490.0);
    }
}
