//! # Implementation Identifier Validator
//!
//! Enforces completeness and format rules on an [`ImplementationIdRecord`]
//! before the host persists it.
//!
//! ## Rules
//!
//! 1. `code` must be present and non-blank, otherwise [`ErrorCode::Required`].
//!    A non-blank `code` must not contain any of [`RESERVED_CHARACTERS`],
//!    otherwise a single [`ErrorCode::InvalidCharacter`]. The two are
//!    mutually exclusive.
//! 2. `passphrase` must be present and non-blank, otherwise
//!    [`ErrorCode::Required`].
//! 3. `name` and `description` are never checked.
//!
//! All rules run on every call. Nothing is deduplicated against entries
//! already in the accumulator.

use crate::errors::{ErrorCode, ValidationErrors};
use crate::record::{Field, ImplementationIdRecord};

/// Delimiters of the pipe/caret handshake message format. An identifier
/// containing either would corrupt the message it is embedded in.
pub const RESERVED_CHARACTERS: [char; 2] = ['^', '|'];

/// Whether `value` contains any reserved delimiter character.
pub fn contains_reserved_character(value: &str) -> bool {
    value.contains(&RESERVED_CHARACTERS[..])
}

/// Absent and whitespace-only values both count as missing.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check `record` and append any problems to `errors`.
///
/// Never panics and never reads or removes entries already in `errors`.
pub fn validate(record: &ImplementationIdRecord, errors: &mut ValidationErrors) {
    tracing::trace!(code = ?record.code, "validating implementation identifier");

    let code = record.code.as_deref();
    if is_blank(code) {
        reject(errors, Field::Code, ErrorCode::Required);
    } else if code.is_some_and(contains_reserved_character) {
        reject(errors, Field::Code, ErrorCode::InvalidCharacter);
    }

    if is_blank(record.passphrase.as_deref()) {
        reject(errors, Field::Passphrase, ErrorCode::Required);
    }
}

fn reject(errors: &mut ValidationErrors, field: Field, code: ErrorCode) {
    tracing::debug!(%field, %code, "implementation identifier field rejected");
    errors.reject(field, code);
}

/// Validate into a fresh accumulator.
pub fn validate_record(record: &ImplementationIdRecord) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    validate(record, &mut errors);
    errors
}

/// Whether `record` passes every rule.
pub fn is_valid(record: &ImplementationIdRecord) -> bool {
    validate_record(record).is_empty()
}

/// A validator for one kind of record.
pub trait Validator {
    /// The record type this validator inspects.
    type Target;

    /// Append any problems with `target` to `errors`.
    fn validate(&self, target: &Self::Target, errors: &mut ValidationErrors);
}

/// [`Validator`] for [`ImplementationIdRecord`], for hosts that keep
/// validators as values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplementationIdValidator;

impl ImplementationIdValidator {
    /// Create the validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for ImplementationIdValidator {
    type Target = ImplementationIdRecord;

    fn validate(&self, target: &ImplementationIdRecord, errors: &mut ValidationErrors) {
        validate(target, errors);
    }
}
