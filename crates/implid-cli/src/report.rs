//! # Report Rendering
//!
//! One [`RecordReport`] per validated record, rendered as plain text lines
//! or as a JSON array.

use std::io::{self, Write};

use clap::ValueEnum;
use implid_core::ValidationErrors;
use serde::Serialize;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `<source>#<index>: ok` or one `<field>: <code>` line per error.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}

/// Outcome of validating one record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    /// Where the record came from (file path or `<flags>`).
    pub source: String,
    /// Position of the record within its source.
    pub index: usize,
    /// `true` when no error was recorded.
    pub valid: bool,
    /// Accumulated field errors.
    pub errors: ValidationErrors,
}

impl RecordReport {
    /// Build a report from an accumulator.
    pub fn new(source: impl Into<String>, index: usize, errors: ValidationErrors) -> Self {
        Self {
            source: source.into(),
            index,
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Whether every report is valid.
pub fn all_valid(reports: &[RecordReport]) -> bool {
    reports.iter().all(|r| r.valid)
}

/// Render `reports` to `out` in `format`.
pub fn render(reports: &[RecordReport], format: ReportFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(reports, out),
        ReportFormat::Json => render_json(reports, out),
    }
}

fn render_text(reports: &[RecordReport], out: &mut impl Write) -> io::Result<()> {
    for report in reports {
        let label = format!("{}#{}", report.source, report.index);
        if report.valid {
            writeln!(out, "{label}: ok")?;
            continue;
        }
        for entry in &report.errors {
            writeln!(out, "{label}: {entry}")?;
        }
    }
    Ok(())
}

fn render_json(reports: &[RecordReport], out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports).map_err(io::Error::other)?;
    writeln!(out)
}
