//! Birthday field.

use super::field::Field;
use crate::error::{FieldError, FieldResult};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual layout of a birthday, as understood by `chrono`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse `DD.MM.YYYY` text, rejecting impossible dates and dates after `today`.
///
/// Day and month may be written without a leading zero.
///
/// # Errors
///
/// - `FieldError::InvalidDateFormat` for malformed or impossible dates
/// - `FieldError::FutureBirthday` when the date is strictly after `today`
pub fn parse_birthday(raw: &str, today: NaiveDate) -> FieldResult<NaiveDate> {
    let text = raw.trim();
    if !BIRTHDAY_REGEX.is_match(text) {
        return Err(FieldError::InvalidDateFormat(raw.to_string()));
    }

    let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
        .map_err(|_| FieldError::InvalidDateFormat(raw.to_string()))?;

    if date > today {
        return Err(FieldError::FutureBirthday(date));
    }
    Ok(date)
}

/// A contact's date of birth; absent until set.
///
/// # Example
///
/// ```
/// use address_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::new(Some("15.03.1990")).unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Birthday {
    date: Option<NaiveDate>,
}

impl Birthday {
    /// Create a Birthday, validating against the current date.
    pub fn new(raw: Option<&str>) -> FieldResult<Self> {
        let mut birthday = Self::default();
        birthday.set(raw)?;
        Ok(birthday)
    }

    /// Like [`Field::set`], but validates against an explicit `today`.
    pub fn set_at(&mut self, raw: Option<&str>, today: NaiveDate) -> FieldResult<()> {
        self.date = match raw {
            None => None,
            Some(raw) => Some(parse_birthday(raw, today)?),
        };
        Ok(())
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn get(&self) -> Option<&NaiveDate> {
        self.date.as_ref()
    }

    fn set(&mut self, raw: Option<&str>) -> FieldResult<()> {
        self.set_at(raw, today())
    }
}

// Serde support - serialize as "DD.MM.YYYY" or null
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.date
            .map(|d| d.format(BIRTHDAY_FORMAT).to_string())
            .serialize(serializer)
    }
}

// Serde support - deserialize with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Birthday::new(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}", date.format(BIRTHDAY_FORMAT)),
            None => Ok(()),
        }
    }
}
