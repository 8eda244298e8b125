//! The address book: an ordered, name-keyed collection of contact records.

use crate::models::ContactRecord;
use crate::scheduler::{adjust_for_weekend, days_until, next_occurrence};
use chrono::{Local, NaiveDate};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How many days ahead the upcoming-birthday query looks by default.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The day to congratulate them, moved off weekends
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.congratulation_date.format(crate::domain::BIRTHDAY_FORMAT)
        )
    }
}

/// Mapping from contact name to exactly one [`ContactRecord`].
///
/// Records are kept in insertion order, which is also the order used for
/// display and for the upcoming-birthday query. Adding a record under a name
/// that already exists replaces the old record in its original position
/// (last write wins, phone lists are not merged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any existing entry.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by exact name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record called `name`; absent names are ignored.
    ///
    /// Returns the removed record, if there was one.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.position(name).map(|index| self.records.remove(index))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Names of all records in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(ContactRecord::name).collect()
    }

    /// Contacts with a birthday in the next `days` days, counted from the local date.
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Contacts with a birthday between `today` and `today + days`, inclusive.
    ///
    /// A birthday already behind `today` this year is taken from next year.
    /// Saturday and Sunday occurrences are congratulated on the following
    /// Monday. Results follow insertion order, not date order.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let window = i64::from(days);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = next_occurrence(birthday, today)?;
                let delta = days_until(today, occurrence);
                if !(0..=window).contains(&delta) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: adjust_for_weekend(occurrence),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - rebuild through add_record so duplicate names collapse
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address Book:")?;
        for record in &self.records {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
