//! Record model: one contact's full data.

use crate::domain::{today, Birthday, Name, Phone};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers, and an optional birthday.
///
/// The name is the record's identity inside an
/// [`AddressBook`](crate::models::AddressBook) and cannot be changed after
/// construction. Phones and birthday start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Phone,
    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Phone::default(),
            birthday: Birthday::default(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &Phone {
        &self.phones
    }

    pub fn phones_mut(&mut self) -> &mut Phone {
        &mut self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    pub fn birthday_mut(&mut self) -> &mut Birthday {
        &mut self.birthday
    }

    /// Days from the current local date to the next birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(today())
    }

    /// Days from `today` to the next birthday.
    ///
    /// The next occurrence falls in the current year when `today` is strictly
    /// before the birthday's month/day, otherwise in the following year; a
    /// birthday that is today therefore yields a full year. A Feb 29 birthday
    /// is celebrated on Mar 1 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.date()?;
        let birthday = (born.month(), born.day());

        let year = if (today.month(), today.day()) < birthday {
            today.year()
        } else {
            today.year() + 1
        };

        let next = anniversary(year, birthday.0, birthday.1)?;
        Some((next - today).num_days())
    }
}

/// The calendar date of a month/day in `year`, moving Feb 29 to Mar 1 when
/// `year` is not a leap year.
fn anniversary(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        tracing::trace!(year, "Leap-day birthday moved to Mar 1");
        NaiveDate::from_ymd_opt(year, 3, 1)
    })
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.name, self.phones, self.birthday)
    }
}
