//! Calendar day identity.
//!
//! # Responsibility
//! - Define the canonical `YYYY-MM-DD` key addressing one day's record.
//! - Provide day arithmetic and Monday-start week boundaries.
//!
//! # Invariants
//! - The textual form is always zero-padded and locale-independent.
//! - Parsing accepts only the canonical spelling; a parsed key formats back
//!   to its input byte for byte.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%m-%d";

/// Canonical identity of one calendar day's record.
///
/// Wraps a plain calendar date; the zero-padded string form is the sole
/// storage key, so ordering of keys matches ordering of dates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DateKey(NaiveDate);

/// Rejected date key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateKey {
    pub value: String,
}

impl Display for InvalidDateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date key `{}`; expected zero-padded YYYY-MM-DD",
            self.value
        )
    }
}

impl Error for InvalidDateKey {}

impl DateKey {
    /// Wraps an already-validated calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's key in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The key `days` after (or before, when negative) this one.
    pub fn offset_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Monday of the week containing this key.
    ///
    /// A Sunday key resolves to six days earlier.
    pub fn week_start(self) -> Self {
        let behind_monday = i64::from(self.0.weekday().num_days_from_monday());
        self.offset_days(-behind_monday)
    }

    /// English weekday name.
    pub fn day_name(self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Short locale-independent `MM-DD` display label.
    pub fn short_label(self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = InvalidDateKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveDate::parse_from_str(value, KEY_FORMAT).map_err(|_| InvalidDateKey {
            value: value.to_string(),
        })?;

        // chrono also accepts unpadded fields like `2026-8-5`; only the
        // canonical spelling is a valid storage key.
        if parsed.format(KEY_FORMAT).to_string() != value {
            return Err(InvalidDateKey {
                value: value.to_string(),
            });
        }

        Ok(Self(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::DateKey;
    use chrono::NaiveDate;

    fn key(year: i32, month: u32, day: u32) -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(key(2026, 8, 5).to_string(), "2026-08-05");
        assert_eq!(key(2026, 12, 31).to_string(), "2026-12-31");
    }

    #[test]
    fn parses_canonical_form_only() {
        let parsed: DateKey = "2026-08-05".parse().unwrap();
        assert_eq!(parsed, key(2026, 8, 5));

        assert!("2026-8-5".parse::<DateKey>().is_err());
        assert!("05-08-2026".parse::<DateKey>().is_err());
        assert!("not-a-date".parse::<DateKey>().is_err());
        assert!("2026-02-30".parse::<DateKey>().is_err());
    }

    #[test]
    fn offset_days_crosses_month_boundaries() {
        assert_eq!(key(2026, 8, 31).offset_days(1), key(2026, 9, 1));
        assert_eq!(key(2026, 1, 1).offset_days(-1), key(2025, 12, 31));
    }

    #[test]
    fn week_start_is_monday() {
        // 2026-08-05 is a Wednesday.
        assert_eq!(key(2026, 8, 5).week_start(), key(2026, 8, 3));
        // Monday maps to itself.
        assert_eq!(key(2026, 8, 3).week_start(), key(2026, 8, 3));
        // Sunday belongs to the week that started six days earlier.
        assert_eq!(key(2026, 8, 9).week_start(), key(2026, 8, 3));
    }

    #[test]
    fn day_name_and_label() {
        assert_eq!(key(2026, 8, 3).day_name(), "Monday");
        assert_eq!(key(2026, 8, 9).day_name(), "Sunday");
        assert_eq!(key(2026, 8, 5).short_label(), "08-05");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&key(2026, 8, 5)).unwrap();
        assert_eq!(json, "\"2026-08-05\"");

        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key(2026, 8, 5));
    }
}
