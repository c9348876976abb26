//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact directory.
///
/// None of these are fatal: the shell reports them and reads the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact matches the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The operation needs at least one stored phone number
    #[error("Contact {0} has no phone numbers.")]
    EmptyPhoneList(String),

    /// Wrong number of command arguments; carries the usage hint
    #[error("Invalid command. {0}")]
    InvalidArguments(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
