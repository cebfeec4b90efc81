//! Locale-aware display formatting for numbers, currency and dates.

use crate::core::validators::coerce::to_datetime;
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Separators and symbols used when rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for NumberLocale {
    /// vi-VN: `1.234,5`, `50.000 ₫`, `21/11/2025`
    fn default() -> Self {
        Self {
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            currency_symbol: "₫".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    locale: NumberLocale,
}

impl Formatter {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Rounds half away from zero to exactly `decimals` fraction digits and
    /// groups the integer part by thousands. Non-finite input renders as zero.
    pub fn number(&self, value: f64, decimals: u32) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let decimals = decimals.min(20) as usize;
        let scaled = (value.abs() * 10f64.powi(decimals as i32)).round();

        let mut digits = format!("{:.0}", scaled);
        if digits.len() <= decimals {
            digits = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - decimals);

        let mut out = String::new();
        if value < 0.0 && scaled != 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part, &self.locale.thousands_separator));
        if decimals > 0 {
            out.push_str(&self.locale.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    /// Whole-unit amount followed by a no-break space and the currency symbol.
    pub fn currency(&self, value: f64) -> String {
        format!("{}\u{a0}{}", self.number(value, 0), self.locale.currency_symbol)
    }

    /// Renders a date string with the locale date template, or `""` when it
    /// does not parse.
    pub fn date(&self, value: &str) -> String {
        to_datetime(value)
            .map(|dt| format_date(&dt, &self.locale.date_format))
            .unwrap_or_default()
    }
}

fn group_thousands(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Replaces the first `DD`, `MM` and `YYYY` in `template`.
pub fn format_date(date: &NaiveDateTime, template: &str) -> String {
    template
        .replacen("DD", &format!("{:02}", date.day()), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("YYYY", &date.year().to_string(), 1)
}

pub fn add_days(date: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
pub fn diff_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds().div_euclid(86_400_000)
}
