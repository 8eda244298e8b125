//! Input tokenizing and verb recognition.

use std::fmt;

/// The fixed set of operations the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    /// Blank input line
    Empty,
    /// A verb that is not in the registry
    Unknown(String),
}

impl Command {
    /// Recognize a verb, ignoring case.
    pub fn from_verb(verb: &str) -> Self {
        match verb.to_lowercase().as_str() {
            "" => Command::Empty,
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "del" => Command::Delete,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "exit" | "close" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Usage line shown when arguments are missing.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old_phone> <new_phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::Delete => "del <name>",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
            Command::Empty | Command::Unknown(_) => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Empty => write!(f, "<empty>"),
            Command::Unknown(verb) => write!(f, "{}", verb),
            known => {
                let usage = known.usage();
                write!(f, "{}", usage.split_whitespace().next().unwrap_or(usage))
            }
        }
    }
}

/// Split a line into its command and the remaining whitespace-separated arguments.
///
/// A blank line yields [`Command::Empty`] with no arguments.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(verb) => (Command::from_verb(verb), tokens.map(str::to_string).collect()),
        None => (Command::Empty, Vec::new()),
    }
}
