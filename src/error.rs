//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Each layer has its own enum; lower layers convert into higher ones with `#[from]`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating or mutating a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Phone number does not reduce to 10 or 11 digits
    #[error("Invalid phone number: {0}")]
    InvalidPhoneFormat(String),

    /// Remove/edit referenced a number the field does not hold
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Text is not a DD.MM.YYYY date or names an impossible day
    #[error("Invalid date format: {0} (expected DD.MM.YYYY)")]
    InvalidDateFormat(String),

    /// Birthday lies after the validation date
    #[error("Birthday {0} is in the future")]
    FutureBirthday(NaiveDate),
}

/// Errors raised by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field rejected its input
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Batch iteration requested with a non-positive size
    #[error("Invalid batch size: {0}")]
    InvalidBatchSize(usize),

    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors raised while parsing or executing a front-end command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument was not supplied
    #[error("Missing argument for {command}: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// The address book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<FieldError> for CommandError {
    fn from(err: FieldError) -> Self {
        CommandError::Book(BookError::Field(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with FieldError
pub type FieldResult<T> = Result<T, FieldError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
