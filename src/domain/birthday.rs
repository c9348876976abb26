//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual layout, as a chrono format string.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday entered as `DD.MM.YYYY` and checked against the calendar.
///
/// The entered text is kept for display; the parsed date backs all
/// calendar arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("25.12.1990").unwrap();
/// assert_eq!(birthday.as_str(), "25.12.1990");
/// assert!(Birthday::new("30.02.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating layout and calendar date.
    ///
    /// # Validation Rules
    ///
    /// - Exactly `DD.MM.YYYY`: two-digit day, two-digit month, four-digit
    ///   year, separated by `.`
    /// - Must name a real date (no 30 February, no month 13, no year 0000)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if either rule fails.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !Self::has_layout(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            // Year 0000 parses in chrono but is not a calendar year
            Ok(date) if date.year() >= 1 => Ok(Self { raw, date }),
            _ => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// chrono accepts unpadded fields and signed years, so the fixed
    /// layout is checked up front.
    fn has_layout(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }

    /// The birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day this birthday is observed in `year`.
    ///
    /// Only month and day are used. A 29 February birthday falls on
    /// 1 March in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.03.1985").unwrap();
        assert_eq!(birthday.as_str(), "01.03.1985");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1985, 3, 1).unwrap());
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.1900").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.1990").is_err());
        assert!(Birthday::new("31.04.1990").is_err());
        assert!(Birthday::new("00.01.1990").is_err());
        assert!(Birthday::new("15.13.1990").is_err());
    }

    #[test]
    fn test_birthday_rejects_year_zero() {
        assert_eq!(
            Birthday::new("01.01.0000"),
            Err(ValidationError::InvalidBirthday("01.01.0000".to_string()))
        );
        assert!(Birthday::new("01.01.0001").is_ok());
    }

    #[test]
    fn test_birthday_rejects_wrong_layout() {
        assert!(Birthday::new("1990-12-25").is_err());
        assert!(Birthday::new("25/12/1990").is_err());
        assert!(Birthday::new("5.1.1990").is_err());
        assert!(Birthday::new("25.12.90").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
        assert!(Birthday::new("25.12.1990 ").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_error_keeps_input() {
        let err = Birthday::new("31.11.2001").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("31.11.2001".to_string()));
    }

    #[test]
    fn test_occurrence_ignores_birth_year() {
        let birthday = Birthday::new("25.12.1990").unwrap();
        assert_eq!(
            birthday.occurrence_in(2026),
            NaiveDate::from_ymd_opt(2026, 12, 25)
        );
    }

    #[test]
    fn test_leap_day_observed_on_march_first() {
        let birthday = Birthday::new("29.02.2004").unwrap();
        assert_eq!(
            birthday.occurrence_in(2027),
            NaiveDate::from_ymd_opt(2027, 3, 1)
        );
        assert_eq!(
            birthday.occurrence_in(2028),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("25.12.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"25.12.1990\"");

        let result: Result<Birthday, _> = serde_json::from_str("\"30.02.1990\"");
        assert!(result.is_err());
    }
}
