//! # Validate and Check Subcommands
//!
//! `validate` runs the validator over every record in a set of files;
//! `check` runs it over one record assembled from flags.

use std::path::PathBuf;

use clap::Args;
use implid_core::{ImplementationIdRecord, ImplementationIdValidator, ValidationErrors, Validator};

use crate::load::{load_records, LoadError};
use crate::report::RecordReport;

/// Source label used for records given as flags.
pub const FLAGS_SOURCE: &str = "<flags>";

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record files (JSON or YAML), each holding one record or a list.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Implementation identifier code.
    #[arg(long)]
    pub code: Option<String>,

    /// Installation name.
    #[arg(long)]
    pub name: Option<String>,

    /// Exchange passphrase.
    #[arg(long)]
    pub passphrase: Option<String>,

    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,
}

impl CheckArgs {
    /// The record described by the flags.
    pub fn into_record(self) -> ImplementationIdRecord {
        ImplementationIdRecord {
            code: self.code,
            name: self.name,
            passphrase: self.passphrase,
            description: self.description,
        }
    }
}

fn report_for(
    validator: &ImplementationIdValidator,
    source: &str,
    index: usize,
    record: &ImplementationIdRecord,
) -> RecordReport {
    let mut errors = ValidationErrors::new();
    validator.validate(record, &mut errors);
    if errors.has_errors() {
        tracing::info!(source, index, errors = errors.len(), "record rejected");
    }
    RecordReport::new(source, index, errors)
}

/// Validate every record in every file, in order.
///
/// Stops at the first file that cannot be loaded.
pub fn validate_files(args: &ValidateArgs) -> Result<Vec<RecordReport>, LoadError> {
    let validator = ImplementationIdValidator::new();
    let mut reports = Vec::new();
    for path in &args.files {
        let source = path.display().to_string();
        let records = load_records(path)?;
        reports.extend(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| report_for(&validator, &source, index, record)),
        );
    }
    Ok(reports)
}

/// Validate the record given as flags.
pub fn check(args: CheckArgs) -> RecordReport {
    let record = args.into_record();
    report_for(&ImplementationIdValidator::new(), FLAGS_SOURCE, 0, &record)
}
