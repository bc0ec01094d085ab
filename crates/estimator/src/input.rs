//! Input boundary: turning whatever the user typed into a usable quantity.
//!
//! Free-form text is parsed leniently (longest leading number wins, anything
//! unparseable becomes 0) and then sanitized: NaN, infinities and negative
//! values all become 0. Nothing here is ever reported as an error.

/// Replace NaN, infinite and negative values with 0.
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse user text into a non-negative quantity.
///
/// `"350"` -> 350, `" 12.5kWh"` -> 12.5, `"1e3"` -> 1000, `".5"` -> 0.5,
/// `""` / `"abc"` / `"-4"` -> 0.
pub fn parse_quantity(text: &str) -> f64 {
    sanitize_quantity(parse_leading_number(text).unwrap_or(0.0))
}

/// Parse the longest numeric prefix of `text` (after leading whitespace).
/// Returns `None` if no digits were found.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_quantity("350"), 350.0);
        assert_eq!(parse_quantity("12.5"), 12.5);
        assert_eq!(parse_quantity("0"), 0.0);
    }

    #[test]
    fn test_whitespace_and_trailing_garbage() {
        assert_eq!(parse_quantity("  42"), 42.0);
        assert_eq!(parse_quantity("12.5kWh"), 12.5);
        assert_eq!(parse_quantity("7 miles"), 7.0);
        assert_eq!(parse_quantity("3.2.1"), 3.2);
    }

    #[test]
    fn test_leading_or_trailing_dot() {
        assert_eq!(parse_quantity(".5"), 0.5);
        assert_eq!(parse_quantity("5."), 5.0);
        assert_eq!(parse_quantity("."), 0.0);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_quantity("1e3"), 1000.0);
        assert_eq!(parse_quantity("2.5E-1"), 0.25);
        // dangling exponent is ignored
        assert_eq!(parse_quantity("4e"), 4.0);
        assert_eq!(parse_quantity("4e+"), 4.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("-"), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
        assert_eq!(parse_quantity("Infinity"), 0.0);
    }

    #[test]
    fn test_negative_is_clamped() {
        assert_eq!(parse_leading_number("-4"), Some(-4.0));
        assert_eq!(parse_quantity("-4"), 0.0);
        assert_eq!(parse_quantity("+4"), 4.0);
    }

    #[test]
    fn test_overflow_is_zero() {
        assert_eq!(parse_quantity("1e999"), 0.0);
    }

    #[test]
    fn test_sanitize_quantity() {
        assert_eq!(sanitize_quantity(f64::NAN), 0.0);
        assert_eq!(sanitize_quantity(f64::INFINITY), 0.0);
        assert_eq!(sanitize_quantity(-1.0), 0.0);
        assert_eq!(sanitize_quantity(-0.0), 0.0);
        assert_eq!(sanitize_quantity(3.5), 3.5);
    }
}
