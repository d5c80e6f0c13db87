//! Total numeric helpers shared by the axis engine.
//!
//! Every function here resolves degenerate input (zero, negative, non-finite)
//! to a defined fallback instead of propagating `NaN`/`Infinity`.

/// `10^exponent` as `f64`.
#[must_use]
pub fn pow10(exponent: i32) -> f64 {
    10_f64.powi(exponent)
}

/// Rounds an interval up/down to a human-friendly step: 1, 2 or 5 times a
/// power of ten.
///
/// Returns `0.0` for non-finite or non-positive input, which callers treat as
/// "no ticks".
#[must_use]
pub fn nice(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }

    let exponent = value.log10().floor() as i32;
    let decade = pow10(exponent);
    let fraction = value / decade;
    let nice_fraction = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };

    let stepped = nice_fraction * decade;
    if (-20..0).contains(&exponent) {
        round_to(stepped, -exponent)
    } else {
        stepped
    }
}

/// Number of significant decimals in a value's shortest decimal rendering.
///
/// `0.25 -> 2`, `10.0 -> 0`. Non-finite input yields `0`.
#[must_use]
pub fn precision_of(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }

    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len() as i32,
        None => 0,
    }
}

/// Rounds `value` to `precision` decimal places.
#[must_use]
pub fn round_to(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let factor = pow10(precision.clamp(-308, 308));
    (value * factor).round() / factor
}
