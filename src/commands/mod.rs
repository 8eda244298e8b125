//! Command layer for the interactive assistant.
//!
//! A line of input is split into a [`Command`] and its arguments, dispatched
//! against the [`AddressBook`](crate::models::AddressBook), and the resulting
//! [`Outcome`] is turned into text once, by [`render`].
//!
//! - **parser**: verb recognition and tokenizing
//! - **handlers**: one function per operation
//! - **reply**: success payloads and outcome rendering

pub mod handlers;
pub mod parser;
pub mod reply;

pub use handlers::execute;
pub use parser::{parse_input, Command};
pub use reply::{render, Outcome, Reply};

use crate::models::AddressBook;

/// Parse, execute and render one line of input.
///
/// Returns the text to show the user together with the parsed command, so
/// the caller can react to [`Command::Exit`].
pub fn handle_line(line: &str, book: &mut AddressBook) -> (Command, String) {
    let (command, args) = parse_input(line);
    let outcome = execute(&command, &args, book);
    (command, render(&outcome))
}
