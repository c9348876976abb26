//! The command layer on top of the directory.
//!
//! [`Assistant`] owns the directory for the lifetime of a session, routes
//! each input line to a handler and converts handler errors into the
//! messages shown to the user. It performs no I/O.

pub mod command;
pub mod handlers;
pub mod prompt;

pub use command::{parse_input, Command, Input, UnknownCommand};
pub use prompt::AssistantPrompt;

use crate::directory::Directory;
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;

/// Reply to `hello`.
pub const GREETING_REPLY: &str = "How can I help you?";

/// Reply to `exit`, `close` and end of input.
pub const FAREWELL: &str = "Good bye!";

/// Reply to an unrecognised command word.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the shell should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line.
    Message(String),
    /// Print the message and end the session.
    Exit(String),
    /// Blank input; nothing to print.
    Nothing,
}

/// Source of the reference date for `birthdays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Today {
    /// The local calendar date at the time of the call.
    #[default]
    Local,
    /// A pinned date.
    Fixed(NaiveDate),
}

impl Today {
    pub fn resolve(&self) -> NaiveDate {
        match self {
            Self::Local => chrono::Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}

/// Interactive contact assistant.
#[derive(Debug, Default)]
pub struct Assistant {
    directory: Directory,
    today: Today,
}

impl Assistant {
    /// Create an assistant with an empty directory and the local clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `today` as the reference date for `birthdays`.
    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Handle one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Nothing;
        };

        match input.command.parse::<Command>() {
            Ok(Command::Exit) => Reply::Exit(FAREWELL.to_string()),
            Ok(command) => Reply::Message(self.execute(command, &input.args)),
            Err(UnknownCommand(word)) => {
                tracing::warn!(command = %word, "Unknown command");
                Reply::Message(INVALID_COMMAND.to_string())
            }
        }
    }

    /// Run a parsed command and render its outcome.
    pub fn execute(&mut self, command: Command, args: &[String]) -> String {
        tracing::debug!(command = %command, args = args.len(), "Dispatching command");

        match self.dispatch(command, args) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(command = %command, error = ?err, "Command failed");
                render_error(command, &err)
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &[String]) -> BookResult<String> {
        let directory = &mut self.directory;
        match command {
            Command::Hello => Ok(GREETING_REPLY.to_string()),
            Command::Add => handlers::add_contact(args, directory),
            Command::Change => handlers::change_contact(args, directory),
            Command::Remove => handlers::remove_contact(args, directory),
            Command::Phone => handlers::show_phone(args, directory),
            Command::DeletePhone => handlers::delete_phone(args, directory),
            Command::All => Ok(handlers::list_all(directory)),
            Command::AddBirthday => handlers::add_birthday(args, directory),
            Command::ShowBirthday => handlers::show_birthday(args, directory),
            Command::Birthdays => Ok(handlers::upcoming_birthdays(
                directory,
                self.today.resolve(),
            )),
            Command::Exit => Ok(FAREWELL.to_string()),
        }
    }
}

/// Message for a failed command.
///
/// An empty phone list reads differently depending on what was attempted;
/// everything else uses the error's own text.
pub fn render_error(command: Command, err: &BookError) -> String {
    match (command, err) {
        (Command::Change, BookError::EmptyPhoneList(name)) => {
            format!("Contact {name} has no phone number to change.")
        }
        (Command::DeletePhone, BookError::EmptyPhoneList(name)) => {
            format!("Contact {name} has no phone numbers to remove.")
        }
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected a message, got: {:?}", other),
        }
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut assistant = Assistant::new();
        assert_eq!(assistant.handle_line("   "), Reply::Nothing);
    }

    #[test]
    fn test_exit_and_close() {
        let mut assistant = Assistant::new();
        assert_eq!(assistant.handle_line("exit"), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(assistant.handle_line("CLOSE"), Reply::Exit(FAREWELL.to_string()));
    }

    #[test]
    fn test_unknown_command() {
        let mut assistant = Assistant::new();
        assert_eq!(message(assistant.handle_line("dance")), INVALID_COMMAND);
    }

    #[test]
    fn test_hello() {
        let mut assistant = Assistant::new();
        assert_eq!(message(assistant.handle_line("Hello")), GREETING_REPLY);
    }

    #[test]
    fn test_render_error_by_command() {
        let err = BookError::EmptyPhoneList("Bob".to_string());
        assert_eq!(
            render_error(Command::Change, &err),
            "Contact Bob has no phone number to change."
        );
        assert_eq!(
            render_error(Command::DeletePhone, &err),
            "Contact Bob has no phone numbers to remove."
        );
        assert_eq!(
            render_error(Command::Phone, &err),
            "Contact Bob has no phone numbers."
        );
    }

    #[test]
    fn test_fixed_today() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(Today::Fixed(date).resolve(), date);
    }
}
