//! Address Book - a personal contact registry with validated fields.
//!
//! Contacts carry a name, any number of phone numbers normalized to one of
//! two canonical layouts, and an optional birthday that can never lie in the
//! future. The book answers how many days remain until a contact's next
//! birthday and can be walked in fixed-size batches.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`) behind the `Field` trait
//! - **models**: `Record` (one contact) and `AddressBook` (records keyed by name)
//! - **commands**: Text command interface used by front ends
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use commands::{Command, CommandProcessor, Outcome};
pub use config::Config;
pub use domain::{normalize_phone, Birthday, Field, Name, Phone};
pub use error::{BookError, CommandError, ConfigError, FieldError};
pub use models::{AddressBook, Batches, Record};
