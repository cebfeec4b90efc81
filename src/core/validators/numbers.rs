use super::coerce::{parse_float_prefix, to_number};

regex!(INT, r"^-?[0-9]+$");

pub fn is_int(value: &str) -> bool {
    INT.is_match(value)
}

/// A numeric prefix exists and the whole string converts to a finite number.
pub fn is_float(value: &str) -> bool {
    !parse_float_prefix(value).is_nan() && to_number(value).is_finite()
}

// NaN and infinities are neither even nor odd.
pub fn is_even(value: f64) -> bool {
    value.is_finite() && value % 2.0 == 0.0
}

pub fn is_odd(value: f64) -> bool {
    value.is_finite() && value % 2.0 != 0.0
}

pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

pub fn is_negative(value: f64) -> bool {
    value < 0.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeOptions {
    pub min: f64,
    pub max: f64,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }
}

impl RangeOptions {
    pub fn between(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Inclusive range check; `NaN` is never in range.
pub fn is_in_range(value: f64, options: RangeOptions) -> bool {
    !value.is_nan() && value >= options.min && value <= options.max
}
