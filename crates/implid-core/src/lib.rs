//! # implid-core — Implementation Identifier Validation
//!
//! An installation of the records platform is tagged with an implementation
//! identifier when it exchanges data with peer installations. This crate
//! defines that record and the validator that checks it before the host
//! persists it.
//!
//! ## Key Design Principles
//!
//! 1. **Validation failures are data, not errors.** The validator appends
//!    [`FieldError`] entries to a caller-owned [`ValidationErrors`]
//!    accumulator. The caller decides whether any entry blocks persistence.
//!
//! 2. **Every check runs.** A single call can report problems on `code` and
//!    `passphrase` at once.
//!
//! 3. **Reserved delimiters are rejected at the edge.** The identifier is
//!    later embedded in a pipe- and caret-delimited handshake message, so
//!    `^` and `|` never make it past [`validate`].
//!
//! ## Crate Policy
//!
//! - No I/O, no global state. Safe to call from any thread.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The passphrase is never logged and is redacted from `Debug` output.

pub mod error;
pub mod errors;
pub mod record;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use error::ImplIdError;
pub use errors::{ErrorCode, FieldError, ValidationErrors};
pub use record::{Field, ImplementationIdRecord};
pub use validator::{
    contains_reserved_character, is_valid, validate, validate_record, ImplementationIdValidator,
    Validator, RESERVED_CHARACTERS,
};
