//! Data models for the contact assistant.
//!
//! This module contains the contact record and the address book that owns
//! all records for a session, including the upcoming-birthday query.

pub mod address_book;
pub mod contact;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_UPCOMING_WINDOW_DAYS};
pub use contact::ContactRecord;
