//! # Field Error Accumulator
//!
//! [`ValidationErrors`] collects field-scoped [`FieldError`] entries. It is
//! created and owned by the caller, handed to the validator by `&mut`, and
//! inspected afterwards. The validator only ever appends.
//!
//! Entries are never deduplicated: validating the same record twice into
//! the same accumulator yields every entry twice.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ImplIdError;
use crate::record::Field;

/// Why a field was rejected.
///
/// The symbolic code a host maps to a user-facing message depends on both
/// the kind and the field; see [`ErrorCode::symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A mandatory field is absent or blank.
    Required,
    /// The identifier contains a reserved delimiter character.
    InvalidCharacter,
}

impl ErrorCode {
    /// Short name of the kind: `empty` or `invalidcharacter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "empty",
            Self::InvalidCharacter => "invalidcharacter",
        }
    }

    /// Field-specific symbolic code, e.g. `implementationId.empty` or
    /// `passphrase.empty`.
    ///
    /// The `code` field is published under its exchange name
    /// `implementationId`.
    pub fn symbol(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Code, Self::Required) => "implementationId.empty",
            (Field::Code, Self::InvalidCharacter) => "implementationId.invalidcharacter",
            (Field::Name, Self::Required) => "name.empty",
            (Field::Name, Self::InvalidCharacter) => "name.invalidcharacter",
            (Field::Passphrase, Self::Required) => "passphrase.empty",
            (Field::Passphrase, Self::InvalidCharacter) => "passphrase.invalidcharacter",
            (Field::Description, Self::Required) => "description.empty",
            (Field::Description, Self::InvalidCharacter) => "description.invalidcharacter",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejection of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    /// The rejected field.
    pub field: Field,
    /// Why it was rejected.
    pub code: ErrorCode,
}

impl FieldError {
    /// The field-specific symbolic code of this entry.
    pub fn symbol(&self) -> &'static str {
        self.code.symbol(self.field)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.symbol())
    }
}

/// Field-keyed accumulator of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<Field, Vec<FieldError>>,
}

impl ValidationErrors {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error for `field`.
    pub fn reject(&mut self, field: Field, code: ErrorCode) {
        self.by_field
            .entry(field)
            .or_default()
            .push(FieldError { field, code });
    }

    /// Whether any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Whether no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Total number of recorded entries across all fields.
    pub fn len(&self) -> usize {
        self.by_field.values().map(Vec::len).sum()
    }

    /// Whether at least one error was recorded for `field`.
    pub fn has_field_errors(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    /// All errors recorded for `field`, in insertion order.
    pub fn field_errors(&self, field: Field) -> &[FieldError] {
        self.by_field
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first error recorded for `field`.
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.field_errors(field).first()
    }

    /// Every entry, grouped by field in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.by_field.values().flatten()
    }

    /// `Ok(())` when empty, otherwise [`ImplIdError::Rejected`] carrying
    /// every entry.
    pub fn into_result(self) -> Result<(), ImplIdError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ImplIdError::Rejected(self))
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = Box<dyn Iterator<Item = &'a FieldError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Serializes as `{ "<field>": ["<symbol>", ...], ... }`.
impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.by_field.len()))?;
        for (field, entries) in &self.by_field {
            let symbols: Vec<&str> = entries.iter().map(FieldError::symbol).collect();
            map.serialize_entry(field, &symbols)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accumulator_is_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());
        assert_eq!(errors.len(), 0);
        assert!(errors.field_errors(Field::Code).is_empty());
        assert!(errors.field_error(Field::Code).is_none());
    }

    #[test]
    fn reject_appends_in_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Code, ErrorCode::InvalidCharacter);
        errors.reject(Field::Code, ErrorCode::Required);

        let codes: Vec<ErrorCode> = errors
            .field_errors(Field::Code)
            .iter()
            .map(|e| e.code)
            .collect();
        assert_eq!(codes, vec![ErrorCode::InvalidCharacter, ErrorCode::Required]);
        assert_eq!(
            errors.field_error(Field::Code).map(|e| e.code),
            Some(ErrorCode::InvalidCharacter)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn has_field_errors_is_field_scoped() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Passphrase, ErrorCode::Required);
        assert!(errors.has_field_errors(Field::Passphrase));
        assert!(!errors.has_field_errors(Field::Code));
        assert!(!errors.has_field_errors(Field::Description));
    }

    #[test]
    fn iter_groups_by_field_declaration_order() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Passphrase, ErrorCode::Required);
        errors.reject(Field::Code, ErrorCode::Required);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Code, Field::Passphrase]);
        assert_eq!((&errors).into_iter().count(), 2);
    }

    #[test]
    fn into_result_ok_when_empty() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn into_result_carries_entries() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Code, ErrorCode::Required);
        let expected = errors.clone();
        match errors.into_result() {
            Err(ImplIdError::Rejected(carried)) => assert_eq!(carried, expected),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn display_joins_entries() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Code, ErrorCode::InvalidCharacter);
        errors.reject(Field::Passphrase, ErrorCode::Required);
        assert_eq!(
            errors.to_string(),
            "code: implementationId.invalidcharacter; passphrase: passphrase.empty"
        );
    }

    #[test]
    fn serializes_as_field_to_codes_map() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Code, ErrorCode::Required);
        errors.reject(Field::Passphrase, ErrorCode::Required);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": ["implementationId.empty"],
                "passphrase": ["passphrase.empty"],
            })
        );
    }

    #[test]
    fn required_symbols_are_field_specific() {
        assert_eq!(ErrorCode::Required.symbol(Field::Code), "implementationId.empty");
        assert_eq!(ErrorCode::Required.symbol(Field::Passphrase), "passphrase.empty");
        assert_ne!(
            ErrorCode::Required.symbol(Field::Code),
            ErrorCode::Required.symbol(Field::Passphrase)
        );
    }

    #[test]
    fn invalid_character_symbol_on_code() {
        let entry = FieldError {
            field: Field::Code,
            code: ErrorCode::InvalidCharacter,
        };
        assert_eq!(entry.symbol(), "implementationId.invalidcharacter");
        assert_eq!(entry.to_string(), "code: implementationId.invalidcharacter");
    }

    #[test]
    fn error_code_kind_names() {
        assert_eq!(ErrorCode::Required.as_str(), "empty");
        assert_eq!(ErrorCode::InvalidCharacter.to_string(), "invalidcharacter");
    }
}
