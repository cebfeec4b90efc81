use super::coerce::{parse_int_prefix, to_datetime};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub fn is_date(value: &str) -> bool {
    to_datetime(value).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeOptions {
    pub min: i32,
    pub max: i32,
}

impl Default for AgeOptions {
    fn default() -> Self {
        Self { min: 0, max: 150 }
    }
}

impl AgeOptions {
    pub fn between(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Age in completed years on `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age computed against the local calendar date.
pub fn is_valid_age(birth_date: &str, options: AgeOptions) -> bool {
    is_valid_age_on(birth_date, options, Local::now().date_naive())
}

pub fn is_valid_age_on(birth_date: &str, options: AgeOptions, today: NaiveDate) -> bool {
    match to_datetime(birth_date) {
        Some(birth) => {
            let age = age_on(birth.date(), today);
            age >= options.min && age <= options.max
        }
        None => false,
    }
}

/// Strictly after the current local time.
pub fn is_future_date(value: &str) -> bool {
    is_future_date_at(value, Local::now().naive_local())
}

pub fn is_future_date_at(value: &str, now: NaiveDateTime) -> bool {
    to_datetime(value).is_some_and(|dt| dt > now)
}

/// Allowed start/end hours for a booking slot. The defaults (start 8–10,
/// end 13–15) are one call site's business hours, not a general rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWindow {
    pub start_hours: RangeInclusive<i64>,
    pub end_hours: RangeInclusive<i64>,
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            start_hours: 8..=10,
            end_hours: 13..=15,
        }
    }
}

impl BookingWindow {
    /// `start` and `end` are `HH:MM` strings; only the hour is checked.
    pub fn allows(&self, start: &str, end: &str) -> bool {
        match (hour_of(start), hour_of(end)) {
            (Some(s), Some(e)) => self.start_hours.contains(&s) && self.end_hours.contains(&e),
            _ => false,
        }
    }
}

fn hour_of(time: &str) -> Option<i64> {
    time.split(':').next().and_then(parse_int_prefix)
}

pub fn is_valid_time(start: &str, end: &str) -> bool {
    BookingWindow::default().allows(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let birth = ymd(2000, 6, 15);
        assert_eq!(age_on(birth, ymd(2018, 6, 14)), 17);
        assert_eq!(age_on(birth, ymd(2018, 6, 15)), 18);
        assert_eq!(age_on(birth, ymd(2018, 12, 1)), 18);
    }

    #[test]
    fn test_is_valid_age_on() {
        let opts = AgeOptions::between(18, 65);
        assert!(is_valid_age_on("2000-01-01", opts, ymd(2025, 11, 21)));
        assert!(!is_valid_age_on("2000-01-01", opts, ymd(2017, 12, 31)));
        assert!(is_valid_age_on("2000-01-01", opts, ymd(2018, 1, 1)));
        assert!(is_valid_age_on("2000-01-01", opts, ymd(2065, 12, 31)));
        assert!(!is_valid_age_on("2000-01-01", opts, ymd(2066, 1, 1)));
        assert!(!is_valid_age_on("garbage", opts, ymd(2025, 1, 1)));
        assert!(is_valid_age_on("2020-05-05", AgeOptions::default(), ymd(2025, 1, 1)));
    }

    #[test]
    fn test_is_future_date_at() {
        let now = ymd(2025, 1, 1).and_hms_opt(12, 0, 0).unwrap();
        assert!(is_future_date_at("2025-01-02", now));
        assert!(is_future_date_at("2025-01-01T12:00:01", now));
        assert!(!is_future_date_at("2025-01-01", now));
        assert!(!is_future_date_at("nope", now));
    }

    #[test]
    fn test_booking_window() {
        assert!(is_valid_time("08:00", "13:30"));
        assert!(is_valid_time("10:59", "15:00"));
        assert!(!is_valid_time("07:30", "13:00"));
        assert!(!is_valid_time("09:00", "16:00"));
        assert!(!is_valid_time("ab:00", "13:00"));
        assert!(!is_valid_time("", ""));

        let evening = BookingWindow {
            start_hours: 17..=18,
            end_hours: 20..=22,
        };
        assert!(evening.allows("17:15", "21:00"));
        assert!(!evening.allows("08:00", "13:00"));
    }
}
