//! Command tokenization.

use std::fmt;
use std::str::FromStr;

/// A command word recognised by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Remove,
    Phone,
    DeletePhone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Remove => "remove",
            Self::Phone => "phone",
            Self::DeletePhone => "delete-phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

/// Returned for a command word the assistant does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Expects an already lower-cased word; `close` is an alias of `exit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "remove" => Ok(Self::Remove),
            "phone" => Ok(Self::Phone),
            "delete-phone" => Ok(Self::DeletePhone),
            "all" => Ok(Self::All),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "exit" | "close" => Ok(Self::Exit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of user input split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The first token, lower-cased.
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<Input> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some(Input {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}
