//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the interactive assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shown before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Banner printed once at startup (default: "Welcome to the assistant bot!")
    pub greeting: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Pinned reference date for `birthdays`; `None` means the local date
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Prompt text
    /// - `CONTACT_BOOK_GREETING`: Startup banner
    /// - `LOG_LEVEL`: One of trace, debug, info, warn, error
    /// - `CONTACT_BOOK_TODAY`: Reference date as `YYYY-MM-DD`
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let greeting = env::var("CONTACT_BOOK_GREETING").unwrap_or(defaults.greeting);

        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => Self::parse_log_level(&level)?,
            Err(_) => defaults.log_level,
        };

        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;

        Ok(Config {
            prompt,
            greeting,
            log_level,
            today,
        })
    }

    /// Validate a log level name, case-insensitively.
    fn parse_log_level(level: &str) -> ConfigResult<String> {
        let level = level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), level),
            });
        }
        Ok(level)
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a command: ".to_string(),
            greeting: "Welcome to the assistant bot!".to_string(),
            log_level: "error".to_string(),
            today: None,
        }
    }
}
