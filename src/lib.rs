//! Contact Assistant - a line-oriented personal contact manager.
//!
//! This library stores contacts (name, phone numbers, birthday), validates
//! their formats, and finds whose birthday is coming up, moving weekend
//! congratulations to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: Contact records and the address book
//! - **scheduler**: Date arithmetic for birthday occurrences and weekend rollover
//! - **commands**: Command parsing, dispatch and reply rendering
//! - **repositories**: Loading and saving the address book snapshot
//! - **session**: The interactive read loop tying input, commands and storage together
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scheduler;
pub mod session;

pub use commands::{execute, handle_line, parse_input, render, Command, Outcome, Reply};
pub use config::Config;
pub use domain::{parse_birthday, parse_phone, BirthdayDate, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, ContactRecord, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
