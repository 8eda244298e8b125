//! One handler per command, all operating on a borrowed address book.
//!
//! Handlers never print and never panic on user input; every failure comes
//! back as a [`BookError`] inside the [`Outcome`].

use crate::commands::parser::Command;
use crate::commands::reply::{Outcome, Reply};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, ContactRecord, DEFAULT_UPCOMING_WINDOW_DAYS};
use tracing::{debug, warn};

/// Run `command` with its positional `args` against `book`.
pub fn execute(command: &Command, args: &[String], book: &mut AddressBook) -> Outcome {
    debug!(command = %command, args = args.len(), "Dispatching command");

    let outcome = match command {
        Command::Hello => Ok(Reply::Greeting),
        Command::Help => Ok(Reply::Help),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => show_all(book),
        Command::Delete => delete_contact(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => upcoming_birthdays(book),
        Command::Exit => Ok(Reply::Goodbye),
        Command::Empty => Ok(Reply::PromptForCommand),
        Command::Unknown(verb) => Ok(Reply::UnknownCommand(verb.clone())),
    };

    if let Err(ref e) = outcome {
        warn!(command = %command, error = %e, "Command failed");
    }
    outcome
}

/// Positional argument `index`, or `MissingArguments` with the command's usage.
fn arg<'a>(args: &'a [String], index: usize, command: &Command) -> BookResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArguments {
            usage: command.usage(),
        })
}

fn contact_not_found(name: &str) -> BookError {
    BookError::NotFound(format!("contact {}", name))
}

fn add_contact(args: &[String], book: &mut AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::Add)?;
    let phone = arg(args, 1, &Command::Add)?;

    let reply = if book.find(name).is_some() {
        Reply::ContactUpdated
    } else {
        // Registered before the phone is checked; a rejected phone leaves it empty
        book.add_record(ContactRecord::new(name)?);
        Reply::ContactAdded
    };

    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.add_phone(phone)?;
    Ok(reply)
}

fn change_contact(args: &[String], book: &mut AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::Change)?;
    let old_phone = arg(args, 1, &Command::Change)?;
    let new_phone = arg(args, 2, &Command::Change)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::LookupFailure(format!("no contact named {}", name)))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(Reply::PhoneChanged)
}

fn show_phone(args: &[String], book: &AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::Phone)?;
    book.find(name)
        .map(|record| Reply::Contact(record.clone()))
        .ok_or_else(|| contact_not_found(name))
}

fn show_all(book: &AddressBook) -> Outcome {
    if book.is_empty() {
        return Ok(Reply::NoContacts);
    }
    Ok(Reply::Contacts(book.to_string()))
}

fn delete_contact(args: &[String], book: &mut AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::Delete)?;
    if book.delete(name).is_none() {
        debug!(name, "Delete requested for unknown contact");
    }
    Ok(Reply::ContactDeleted)
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::AddBirthday)?;
    let birthday = arg(args, 1, &Command::AddBirthday)?;

    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.add_birthday(birthday)?;
    Ok(Reply::BirthdayAdded)
}

fn show_birthday(args: &[String], book: &AddressBook) -> Outcome {
    let name = arg(args, 0, &Command::ShowBirthday)?;
    book.find(name)
        .map(|record| Reply::BirthdayInfo(record.describe_birthday()))
        .ok_or_else(|| contact_not_found(name))
}

fn upcoming_birthdays(book: &AddressBook) -> Outcome {
    let upcoming = book.get_upcoming_birthdays(DEFAULT_UPCOMING_WINDOW_DAYS);
    if upcoming.is_empty() {
        return Ok(Reply::NoUpcomingBirthdays);
    }
    Ok(Reply::UpcomingBirthdays(upcoming))
}
