//! Default label formatters.
//!
//! These are the crate-supplied implementations behind the formatting hooks:
//! hosts may swap any of them for an opaque callback of the same shape.

/// Formats a value with a fixed number of decimals.
#[must_use]
pub fn format_precision(value: f64, precision: i32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = precision.max(0) as usize;
    format!("{value:.decimals$}")
}

/// Folds large magnitudes into `K`/`M`/`B` suffixes, keeping at most three
/// decimals with trailing zeros stripped.
#[must_use]
pub fn format_big_number(value: f64) -> String {
    if value.is_finite() {
        for (threshold, suffix) in [(1e9, "B"), (1e6, "M"), (1e3, "K")] {
            if value > threshold {
                return format!("{}{suffix}", trim_trailing_zeros(value / threshold));
            }
        }
    }
    value.to_string()
}

fn trim_trailing_zeros(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Inserts a grouping separator every three digits of the integer part.
#[must_use]
pub fn format_thousands(value: &str, separator: &str) -> String {
    if separator.is_empty() {
        return value.to_string();
    }

    let (int_part, fraction) = match value.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (value, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return value.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        grouped.push(ch);
        if remaining > 1 && remaining % 3 == 1 {
            grouped.push_str(separator);
        }
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Folds a run of at least `threshold` zeros after the decimal point into a
/// subscript count: `0.0000001234` with threshold 3 becomes `0.0₆1234`.
#[must_use]
pub fn format_fold_decimal(value: &str, threshold: usize) -> String {
    if threshold == 0 {
        return value.to_string();
    }

    let Some((int_part, fraction)) = value.split_once('.') else {
        return value.to_string();
    };

    let zeros = fraction.chars().take_while(|ch| *ch == '0').count();
    let rest = &fraction[zeros..];
    if zeros < threshold || rest.is_empty() || !rest.bytes().all(|byte| byte.is_ascii_digit()) {
        return value.to_string();
    }

    let folded: String = zeros.to_string().chars().map(subscript_digit).collect();
    format!("{int_part}.0{folded}{rest}")
}

fn subscript_digit(digit: char) -> char {
    char::from_u32(0x2080 + digit.to_digit(10).unwrap_or(0)).unwrap_or(digit)
}

#[cfg(test)]
mod tests {
    use super::{format_big_number, format_fold_decimal, format_precision, format_thousands};

    #[test]
    fn precision_formats_fixed_decimals() {
        assert_eq!(format_precision(1.005, 2), "1.00");
        assert_eq!(format_precision(12.0, 0), "12");
        assert_eq!(format_precision(-0.5, 3), "-0.500");
    }

    #[test]
    fn big_number_folds_magnitudes() {
        assert_eq!(format_big_number(1_234.0), "1.234K");
        assert_eq!(format_big_number(2_500_000.0), "2.5M");
        assert_eq!(format_big_number(7_000_000_000.0), "7B");
        assert_eq!(format_big_number(999.0), "999");
    }

    #[test]
    fn thousands_groups_integer_part_only() {
        assert_eq!(format_thousands("1234567", ","), "1,234,567");
        assert_eq!(format_thousands("-1234.56", ","), "-1,234.56");
        assert_eq!(format_thousands("987", ","), "987");
        assert_eq!(format_thousands("1234", ""), "1234");
    }

    #[test]
    fn fold_decimal_replaces_zero_runs() {
        assert_eq!(format_fold_decimal("0.0000001234", 3), "0.0\u{2086}1234");
        assert_eq!(format_fold_decimal("0.001234", 3), "0.001234");
        assert_eq!(format_fold_decimal("12", 3), "12");
    }
}
