//! # implid-cli — Implementation Identifier Command-Line Host
//!
//! A thin host around `implid-core`: it turns files and flags into
//! [`ImplementationIdRecord`](implid_core::ImplementationIdRecord) values,
//! runs the validator, and renders what came back. It adds no validation
//! rules of its own.
//!
//! ## Subcommands
//!
//! - `validate` — validate every record in one or more JSON/YAML files
//! - `check` — validate a single record given as flags
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here so they can be
//!   tested without spawning a process.
//! - Reports go to stdout, logs to stderr.

pub mod load;
pub mod report;
pub mod validate;
