//! Domain value objects: the validated fields of a contact.
//!
//! Each field type owns its storage privately and implements the shared
//! [`Field`] capability. Validation happens on every write, so an invalid
//! value can never be represented.

pub mod birthday;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{parse_birthday, today, Birthday, BIRTHDAY_FORMAT};
pub use field::Field;
pub use name::Name;
pub use phone::{normalize_phone, Phone, PHONE_SEPARATOR};
