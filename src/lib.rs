//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers and birthdays in memory and answers
//! line-oriented commands such as "who has a birthday next week".
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The contact `Record`
//! - **directory**: Case-insensitive `Directory` and the birthday window
//! - **assistant**: Command parsing, handlers and reply rendering
//! - **error**: Error types for precise error handling
//! - **config**: Configuration from environment variables

pub mod assistant;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{Assistant, Command, Reply, Today};
pub use config::Config;
pub use directory::{BirthdayWindow, Directory};
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
