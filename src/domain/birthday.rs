//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The textual layout of a birthday, as accepted and displayed.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone would accept `1.1.2024`; the shape check pins the digit counts.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated calendar date of birth.
///
/// Accepted input is `DD.MM.YYYY` with exactly two digits for the day,
/// two for the month and four for the year, and the combination must be
/// a real Gregorian date (`30.02.2024` is rejected). The value displays
/// and serializes back in the same `DD.MM.YYYY` form.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(BirthdayDate::new("31.04.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Create a new BirthdayDate from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape or does not name a real date.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))?;

        // Year 0000 has the right shape but is not a calendar year of the common era
        if date.year() < 1 {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        Ok(Self(date))
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

/// Parse raw text into a [`BirthdayDate`].
pub fn parse_birthday(text: &str) -> Result<BirthdayDate, ValidationError> {
    BirthdayDate::new(text)
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
