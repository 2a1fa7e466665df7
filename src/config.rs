//! Configuration management for the address book front end.
//!
//! This module handles loading and validating configuration from environment
//! variables, after reading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for an address book session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per page when listing the whole book (default: 5)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, must be positive (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: 5,
            log_level: "error".to_string(),
        }
    }
}
