//! The interactive read loop.
//!
//! The address book is loaded once when the session starts and saved once
//! when the user exits. Nothing is saved in between, so a session that is
//! killed loses its unsaved changes.

use crate::commands::{handle_line, Command};
use crate::repositories::BookRepository;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Text shown before each command is read.
pub const PROMPT: &str = "Enter a command: ";

/// Run a session reading commands from `input` and answering on `output`.
///
/// End of input is handled like `exit`, so the book is still saved.
/// Command failures are reported to the user and never end the session;
/// only I/O on the streams or a failed load/save returns an error.
pub fn run_session<R, W>(
    input: R,
    output: &mut W,
    repository: &dyn BookRepository,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut book = repository
        .load()
        .context("Could not read the saved address book")?;
    info!(records = book.len(), "Session started");

    let mut lines = input.lines();

    writeln!(output, "Welcome to the assistant bot!")?;
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => {
                writeln!(output)?;
                "exit".to_string()
            }
        };

        let (command, message) = handle_line(&line, &mut book);

        if command == Command::Exit {
            repository
                .save(&book)
                .context("Could not save the address book")?;
            writeln!(output, "{}", message)?;
            break;
        }

        writeln!(output, "{}", message)?;
    }

    info!(records = book.len(), "Session finished");
    Ok(())
}
