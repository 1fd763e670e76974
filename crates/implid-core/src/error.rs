//! # Error Types
//!
//! Rust-level errors for this crate. Field validation problems are NOT
//! represented here; they are accumulated as [`FieldError`] entries in a
//! [`ValidationErrors`] set. [`ImplIdError::Rejected`] exists only for
//! callers that opt into "any entry blocks" semantics through
//! [`ValidationErrors::into_result`].
//!
//! [`FieldError`]: crate::errors::FieldError

use thiserror::Error;

use crate::errors::ValidationErrors;

/// Top-level error type for implementation identifier handling.
#[derive(Error, Debug)]
pub enum ImplIdError {
    /// The record carried one or more field validation errors.
    #[error("implementation identifier rejected: {0}")]
    Rejected(ValidationErrors),

    /// A field name did not match any field of the record.
    #[error("unknown implementation identifier field: {0:?}")]
    UnknownField(String),
}

impl ImplIdError {
    /// The accumulated field errors, if this is a rejection.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::UnknownField(_) => None,
        }
    }
}
