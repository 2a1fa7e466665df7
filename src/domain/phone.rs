//! Phone field: an ordered list of canonical phone numbers.

use super::field::Field;
use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Separator used in the textual form of a multi-number field.
pub const PHONE_SEPARATOR: &str = "; ";

/// Normalize raw user input into one of the two canonical phone forms.
///
/// Every character other than an ASCII digit is stripped first, so
/// full-width or other non-ASCII digits count as punctuation. Ten remaining digits become
/// `(AAA) BBB-CCCC`; eleven become `D (AAA) BBB-CCCC`. Any other count is
/// rejected.
///
/// # Errors
///
/// Returns `FieldError::InvalidPhoneFormat` if the digit count is not 10 or 11.
///
/// # Example
///
/// ```
/// use address_book::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("123.456.7890").unwrap(), "(123) 456-7890");
/// assert_eq!(normalize_phone("+1 123 456 7890").unwrap(), "1 (123) 456-7890");
/// ```
pub fn normalize_phone(raw: &str) -> FieldResult<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => Ok(format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..]
        )),
        11 => Ok(format!(
            "{} ({}) {}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        )),
        _ => Err(FieldError::InvalidPhoneFormat(raw.to_string())),
    }
}

/// The phone numbers of one contact.
///
/// Insertion order is kept and duplicates are allowed. Every stored entry is
/// in canonical form; the list only changes through [`Field::set`],
/// [`Phone::add_phone`], [`Phone::remove_phone`] and [`Phone::edit_phone`].
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let mut phone = Phone::new(Some("1234567890")).unwrap();
/// phone.add_phone("11234567890").unwrap();
/// assert_eq!(phone.numbers(), ["(123) 456-7890", "1 (123) 456-7890"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Phone {
    numbers: Vec<String>,
}

impl Phone {
    /// Create a Phone seeded with zero or one number.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::InvalidPhoneFormat` if the initial number is invalid.
    pub fn new(initial: Option<&str>) -> FieldResult<Self> {
        let mut phone = Self::default();
        if initial.is_some() {
            phone.set(initial)?;
        }
        Ok(phone)
    }

    /// Normalize `raw` and append it.
    pub fn add_phone(&mut self, raw: &str) -> FieldResult<&str> {
        let formatted = normalize_phone(raw)?;
        tracing::debug!(phone = %formatted, "Phone number added");
        self.numbers.push(formatted);
        Ok(&self.numbers[self.numbers.len() - 1])
    }

    /// Remove the first entry exactly equal to `formatted`.
    pub fn remove_phone(&mut self, formatted: &str) -> FieldResult<()> {
        let index = self.position(formatted)?;
        self.numbers.remove(index);
        tracing::debug!(phone = %formatted, "Phone number removed");
        Ok(())
    }

    /// Replace `old_formatted` in place with the normalized `new_raw`.
    ///
    /// The lookup happens before normalization, so a missing entry is
    /// reported even when `new_raw` is also invalid.
    pub fn edit_phone(&mut self, old_formatted: &str, new_raw: &str) -> FieldResult<()> {
        let index = self.position(old_formatted)?;
        let formatted = normalize_phone(new_raw)?;
        tracing::debug!(old = %old_formatted, new = %formatted, "Phone number edited");
        self.numbers[index] = formatted;
        Ok(())
    }

    /// Whether `formatted` is one of the stored numbers.
    pub fn contains(&self, formatted: &str) -> bool {
        self.numbers.iter().any(|n| n == formatted)
    }

    /// Stored numbers in insertion order.
    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    fn position(&self, formatted: &str) -> FieldResult<usize> {
        self.numbers
            .iter()
            .position(|n| n == formatted)
            .ok_or_else(|| FieldError::PhoneNotFound(formatted.to_string()))
    }
}

impl Field for Phone {
    type Value = [String];

    fn get(&self) -> Option<&[String]> {
        if self.numbers.is_empty() {
            None
        } else {
            Some(&self.numbers)
        }
    }

    /// `Some(raw)` replaces the whole list with the single normalized number.
    fn set(&mut self, raw: Option<&str>) -> FieldResult<()> {
        match raw {
            None => self.numbers.clear(),
            Some(raw) => self.numbers = vec![normalize_phone(raw)?],
        }
        Ok(())
    }
}

// Serde support - serialize as an array of canonical strings
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.numbers.serialize(serializer)
    }
}

// Serde support - deserialize and re-validate every entry
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        let numbers = raw
            .iter()
            .map(|n| normalize_phone(n))
            .collect::<FieldResult<Vec<_>>>()
            .map_err(serde::de::Error::custom)?;
        Ok(Self { numbers })
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numbers.join(PHONE_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ten_digits() {
        assert_eq!(normalize_phone("1234567890").unwrap(), "(123) 456-7890");
        assert_eq!(normalize_phone("(123)4567890").unwrap(), "(123) 456-7890");
        assert_eq!(normalize_phone("123-456-7890").unwrap(), "(123) 456-7890");
        assert_eq!(normalize_phone(" 123 . 456 / 7890 ").unwrap(), "(123) 456-7890");
    }

    #[test]
    fn test_normalize_eleven_digits() {
        assert_eq!(normalize_phone("11234567890").unwrap(), "1 (123) 456-7890");
        assert_eq!(normalize_phone("+3 (809) 555-0100").unwrap(), "3 (809) 555-0100");
    }

    #[test]
    fn test_normalize_non_ascii_digits_rejected() {
        for raw in ["١٢٣٤٥", "+١٢٣٤٥", "٠٠٠٠٠", "１２３４５６７８９０"] {
            assert_eq!(
                normalize_phone(raw),
                Err(FieldError::InvalidPhoneFormat(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_ignores_multibyte_punctuation() {
        assert_eq!(
            normalize_phone("(123)\u{2011}456\u{2011}7890").unwrap(),
            "(123) 456-7890"
        );
        assert_eq!(
            normalize_phone("1\u{00a0}123\u{2013}456\u{2013}7890").unwrap(),
            "1 (123) 456-7890"
        );
        // Full-width digits are stripped, leaving too few ASCII digits
        assert!(matches!(
            normalize_phone("１２３-456-7890"),
            Err(FieldError::InvalidPhoneFormat(_))
        ));
        // ASCII digits among non-ASCII ones still count
        assert_eq!(
            normalize_phone("١1234567890٢").unwrap(),
            "(123) 456-7890"
        );
    }

    #[test]
    fn test_add_non_ascii_digits_leaves_state() {
        let mut phone = Phone::new(Some("1234567890")).unwrap();
        assert!(matches!(
            phone.add_phone("+١٢٣٤٥"),
            Err(FieldError::InvalidPhoneFormat(_))
        ));
        assert!(phone.edit_phone("(123) 456-7890", "٠٠٠٠٠").is_err());
        assert_eq!(phone.numbers(), ["(123) 456-7890"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_phone("1-123-456-7890").unwrap();
        assert_eq!(normalize_phone(&once).unwrap(), once);
    }

    #[test]
    fn test_normalize_rejects_other_lengths() {
        for raw in ["", "abc", "123456789", "123456789012", "+1 (23) 45"] {
            assert_eq!(
                normalize_phone(raw),
                Err(FieldError::InvalidPhoneFormat(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_seeds_zero_or_one() {
        let empty = Phone::new(None).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.get(), None);

        let one = Phone::new(Some("1234567890")).unwrap();
        assert_eq!(one.numbers(), ["(123) 456-7890"]);

        assert!(Phone::new(Some("12")).is_err());
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut phone = Phone::default();
        phone.add_phone("1234567890").unwrap();
        phone.add_phone("0987654321").unwrap();
        phone.add_phone("123 456 7890").unwrap();
        assert_eq!(
            phone.numbers(),
            ["(123) 456-7890", "(098) 765-4321", "(123) 456-7890"]
        );
    }

    #[test]
    fn test_add_invalid_leaves_state() {
        let mut phone = Phone::new(Some("1234567890")).unwrap();
        assert!(phone.add_phone("555").is_err());
        assert_eq!(phone.len(), 1);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut phone = Phone::default();
        phone.add_phone("1234567890").unwrap();
        phone.add_phone("0987654321").unwrap();
        phone.add_phone("1234567890").unwrap();

        phone.remove_phone("(123) 456-7890").unwrap();
        assert_eq!(phone.numbers(), ["(098) 765-4321", "(123) 456-7890"]);
    }

    #[test]
    fn test_remove_requires_exact_formatted_match() {
        let mut phone = Phone::new(Some("1234567890")).unwrap();
        assert_eq!(
            phone.remove_phone("1234567890"),
            Err(FieldError::PhoneNotFound("1234567890".to_string()))
        );
        assert_eq!(phone.len(), 1);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut phone = Phone::default();
        phone.add_phone("1111111111").unwrap();
        phone.add_phone("2222222222").unwrap();
        phone.add_phone("3333333333").unwrap();

        phone.edit_phone("(222) 222-2222", "9-999-999-9999").unwrap();
        assert_eq!(
            phone.numbers(),
            ["(111) 111-1111", "9 (999) 999-9999", "(333) 333-3333"]
        );
        assert!(!phone.contains("(222) 222-2222"));
        assert!(phone.contains("9 (999) 999-9999"));
    }

    #[test]
    fn test_edit_failures_leave_state() {
        let mut phone = Phone::new(Some("1234567890")).unwrap();

        assert_eq!(
            phone.edit_phone("(000) 000-0000", "0987654321"),
            Err(FieldError::PhoneNotFound("(000) 000-0000".to_string()))
        );
        assert_eq!(
            phone.edit_phone("(123) 456-7890", "42"),
            Err(FieldError::InvalidPhoneFormat("42".to_string()))
        );
        assert_eq!(phone.numbers(), ["(123) 456-7890"]);
    }

    #[test]
    fn test_set_replaces_and_clears() {
        let mut phone = Phone::default();
        phone.add_phone("1111111111").unwrap();
        phone.add_phone("2222222222").unwrap();

        phone.set(Some("33333333333")).unwrap();
        assert_eq!(phone.numbers(), ["3 (333) 333-3333"]);

        assert!(phone.set(Some("bad")).is_err());
        assert_eq!(phone.numbers(), ["3 (333) 333-3333"]);

        phone.set(None).unwrap();
        assert!(phone.is_empty());
    }

    #[test]
    fn test_phone_display() {
        let mut phone = Phone::default();
        assert_eq!(phone.to_string(), "");

        phone.add_phone("1234567890").unwrap();
        phone.add_phone("11234567890").unwrap();
        assert_eq!(phone.to_string(), "(123) 456-7890; 1 (123) 456-7890");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new(Some("1234567890")).unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "[\"(123) 456-7890\"]");

        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("[\"12345\"]");
        assert!(result.is_err());
    }
}
