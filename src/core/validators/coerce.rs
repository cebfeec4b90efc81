//! Loose coercions applied to raw input before it is validated or formatted.
//!
//! Form values arrive as text; these helpers turn them into numbers and
//! dates with the permissive rules browsers use, returning `NaN` / `None`
//! instead of failing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

regex!(DECIMAL, r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$");
regex!(FLOAT_PREFIX, r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)");
regex!(INT_PREFIX, r"^[+-]?[0-9]+");

/// Whole-string numeric conversion. Blank input is zero; anything that is
/// not a complete number is `NaN`.
pub fn to_number(value: &str) -> f64 {
    let t = value.trim();
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }

    if DECIMAL.is_match(t) {
        t.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Parses the longest numeric prefix after leading whitespace, ignoring any
/// trailing garbage (`"12.5px"` -> `12.5`). `NaN` when there is no prefix.
pub fn parse_float_prefix(value: &str) -> f64 {
    let t = value.trim_start();
    match FLOAT_PREFIX.find(t) {
        Some(m) => {
            let digits = m.as_str();
            match digits.trim_start_matches(['+', '-']) {
                "Infinity" if digits.starts_with('-') => f64::NEG_INFINITY,
                "Infinity" => f64::INFINITY,
                _ => digits.parse().unwrap_or(f64::NAN),
            }
        }
        None => f64::NAN,
    }
}

/// Integer prefix (`"08:30"` -> `8`). `None` when the text does not start
/// with digits.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let t = value.trim_start();
    INT_PREFIX.find(t).and_then(|m| m.as_str().parse().ok())
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses the date shapes accepted by form inputs: ISO dates and date-times,
/// RFC 3339 timestamps (converted to local time), `YYYY/MM/DD` and
/// `MM/DD/YYYY`. Date-only values are taken at midnight.
pub fn to_datetime(value: &str) -> Option<NaiveDateTime> {
    let t = value.trim();
    if t.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(t, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(t, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number(" 42 "), 42.0);
        assert_eq!(to_number("-1.5e2"), -150.0);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number("0x1F"), 31.0);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert!(to_number("12px").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("nan").is_nan());
        assert!(to_number("1.2.3").is_nan());
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5px"), 12.5);
        assert_eq!(parse_float_prefix("  -3"), -3.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("-Infinity and beyond"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("").is_nan());
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("08"), Some(8));
        assert_eq!(parse_int_prefix(" 9:30"), Some(9));
        assert_eq!(parse_int_prefix("-2h"), Some(-2));
        assert_eq!(parse_int_prefix("h9"), None);
        assert_eq!(parse_int_prefix(""), None);
    }

    #[test]
    fn test_to_datetime_shapes() {
        let d = to_datetime("2025-11-21").unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (2025, 11, 21, 0));

        let d = to_datetime("2025-11-21T08:15:00").unwrap();
        assert_eq!((d.hour(), d.minute()), (8, 15));

        assert!(to_datetime("2025/11/21").is_some());
        assert!(to_datetime("11/21/2025").is_some());
        assert!(to_datetime("2025-11-21T08:15:00Z").is_some());
        assert!(to_datetime("2025-02-30").is_none());
        assert!(to_datetime("not a date").is_none());
        assert!(to_datetime("").is_none());
    }
}
