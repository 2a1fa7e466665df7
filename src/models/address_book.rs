//! AddressBook: the keyed collection of records.

use super::record::Record;
use crate::domain::normalize_phone;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Records keyed by name.
///
/// Keys are unique and inserting a record under an existing name replaces
/// the old one. Enumeration is in ascending name order.
///
/// Serialized as a list of records; keys are rebuilt from record names on
/// the way back in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        tracing::debug!(name = %key, "Record added");
        self.records.insert(key, record)
    }

    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove and return the record stored under `name`.
    pub fn remove_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        tracing::debug!(name = %name, "Record removed");
        Ok(record)
    }

    /// Records holding `raw` once normalized, in name order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Field` if `raw` is not a valid phone number.
    pub fn find_by_phone(&self, raw: &str) -> BookResult<Vec<&Record>> {
        let formatted = normalize_phone(raw)?;
        Ok(self
            .records
            .values()
            .filter(|record| record.phones().contains(&formatted))
            .collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Lazily walk the book in batches of up to `batch_size` records.
    ///
    /// The records are copied when this is called; later changes to the book
    /// are not seen by the returned iterator.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidBatchSize` when `batch_size` is zero.
    pub fn iter_batches(&self, batch_size: usize) -> BookResult<Batches> {
        if batch_size == 0 {
            return Err(BookError::InvalidBatchSize(batch_size));
        }
        let snapshot: Vec<Record> = self.records.values().cloned().collect();
        tracing::trace!(records = snapshot.len(), batch_size, "Batch iteration started");
        Ok(Batches {
            remaining: snapshot.into_iter(),
            batch_size,
        })
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

/// One-shot iterator over a snapshot of an [`AddressBook`], yielding
/// batches of records.
#[derive(Debug)]
pub struct Batches {
    remaining: std::vec::IntoIter<Record>,
    batch_size: usize,
}

impl Iterator for Batches {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<Record> = self.remaining.by_ref().take(self.batch_size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = self.remaining.len().div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches {}
