//! Success payloads of commands and their conversion to text.

use crate::error::BookResult;
use crate::models::{ContactRecord, UpcomingBirthday};
use std::fmt;

/// What every command returns: a reply on success, a tagged error otherwise.
pub type Outcome = BookResult<Reply>;

const HELP_TEXT: &str = "Available commands:
  hello                                   - greeting
  add <name> <phone>                      - add a contact or a phone to an existing one
  change <name> <old_phone> <new_phone>   - replace a contact's phone number
  phone <name>                            - show a contact
  all                                     - show all contacts
  del <name>                              - delete a contact
  add-birthday <name> <DD.MM.YYYY>        - set a contact's birthday
  show-birthday <name>                    - show a contact's birthday
  birthdays                               - birthdays in the next 7 days and when to congratulate
  help                                    - show this list
  exit | close                            - save and quit";

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    Help,
    ContactAdded,
    ContactUpdated,
    PhoneChanged,
    Contact(ContactRecord),
    /// The rendered address book listing
    Contacts(String),
    NoContacts,
    ContactDeleted,
    BirthdayAdded,
    BirthdayInfo(String),
    UpcomingBirthdays(Vec<UpcomingBirthday>),
    NoUpcomingBirthdays,
    Goodbye,
    PromptForCommand,
    UnknownCommand(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Greeting => write!(f, "How can I help you?"),
            Reply::Help => write!(f, "{}", HELP_TEXT),
            Reply::ContactAdded => write!(f, "Contact added."),
            Reply::ContactUpdated => write!(f, "Contact updated."),
            Reply::PhoneChanged => write!(f, "Phone number updated."),
            Reply::Contact(record) => write!(f, "{}", record),
            Reply::Contacts(listing) => write!(f, "{}", listing),
            Reply::NoContacts => write!(f, "No contacts saved yet."),
            Reply::ContactDeleted => write!(f, "Contact deleted."),
            Reply::BirthdayAdded => write!(f, "Birthday added."),
            Reply::BirthdayInfo(statement) => write!(f, "{}", statement),
            Reply::UpcomingBirthdays(upcoming) => {
                write!(f, "Upcoming birthdays:")?;
                for entry in upcoming {
                    write!(f, "\n{}", entry)?;
                }
                Ok(())
            }
            Reply::NoUpcomingBirthdays => write!(f, "No birthdays in the coming days."),
            Reply::Goodbye => write!(f, "Good bye!"),
            Reply::PromptForCommand => {
                write!(f, "Please enter a command. Type 'help' for the list of commands.")
            }
            Reply::UnknownCommand(verb) => write!(
                f,
                "Sorry, I don't know the command '{}'. Type 'help' for the list of commands.",
                verb
            ),
        }
    }
}

/// Turn an outcome into the text shown to the user.
///
/// This is the single place where errors become messages.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Ok(reply) => reply.to_string(),
        Err(err) => err.to_string(),
    }
}
