//! The shared capability of every validated field.

use crate::error::FieldResult;
use std::fmt;

/// A single validated value with controlled read and write access.
///
/// Implementors own their storage privately; the only way to change the
/// stored value from outside is [`Field::set`], which validates before
/// writing. A rejected write leaves the previous value untouched.
///
/// `Display` renders the textual form of the value. An absent value renders
/// as the empty string for every field, so the textual form can be handed
/// back to `set` to reconstruct the same canonical value.
pub trait Field: fmt::Display {
    /// The shape of the stored value.
    type Value: ?Sized;

    /// Current value, or `None` when the field is absent/empty.
    fn get(&self) -> Option<&Self::Value>;

    /// Validate `raw` and store it. `None` clears the field without error.
    fn set(&mut self, raw: Option<&str>) -> FieldResult<()>;

    /// Whether the field currently holds a value.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}
