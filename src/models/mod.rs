//! Data models for the address book.
//!
//! This module contains the record representing one contact and the keyed
//! collection that owns every record.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Batches};
pub use record::Record;
