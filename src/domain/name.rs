//! Name field.

use super::field::Field;
use crate::error::FieldResult;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name.
///
/// Names are opaque: no validation is applied. The empty string is the
/// absent state.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Name};
///
/// let name = Name::new("Alice");
/// assert_eq!(name.get(), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice (empty when absent).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    type Value = str;

    fn get(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }

    fn set(&mut self, raw: Option<&str>) -> FieldResult<()> {
        self.0 = raw.unwrap_or_default().to_string();
        Ok(())
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
