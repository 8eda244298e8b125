//! Contact record representing a person in the address book.

use crate::domain::{
    parse_birthday, parse_phone, BirthdayDate, ContactName, PhoneNumber, ValidationError,
};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, any number of phone numbers and an optional birthday.
///
/// The name is fixed at creation and acts as the key in an
/// [`AddressBook`](crate::models::AddressBook). Phones keep their insertion
/// order; the same number may be stored twice, and lookups act on the first
/// exact match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Identifying name of the contact
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a new contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// All phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = parse_phone(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is looked up, so a bad number
    /// leaves the record untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new_phone = parse_phone(new)?;
        let index = self.position_of(old)?;
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Exact-match lookup of a phone number.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(parse_birthday(birthday)?);
        Ok(())
    }

    /// Human-readable statement about the birthday; never fails.
    pub fn describe_birthday(&self) -> String {
        match self.birthday {
            Some(birthday) => format!("{}'s birthday is {}", self.name, birthday),
            None => format!("{}'s birthday is not set", self.name),
        }
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::NotFound(format!("phone {} for {}", phone, self.name)))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "(none)")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
            write!(f, "{}", phones.join("; "))?;
        }
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
