//! # Record Loading
//!
//! Reads candidate records from disk. A file holds either a single record
//! object or a sequence of them. `.json` files are parsed as JSON; anything
//! else is parsed as YAML, which also accepts JSON documents.

use std::path::{Path, PathBuf};

use implid_core::ImplementationIdRecord;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error loading a record file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file was read but does not hold records.
    #[error(
        "failed to parse '{}'{}: {reason}",
        path.display(),
        index.map(|i| format!(" record #{i}")).unwrap_or_default()
    )]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Position of the offending record, when the document itself is
        /// well formed.
        index: Option<usize>,
        /// Parser message.
        reason: String,
    },
}

fn parse_error(path: &Path, index: Option<usize>, reason: impl ToString) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        index,
        reason: reason.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Deserialize one record. Only mappings are records; serde would
/// otherwise read a sequence of scalars positionally.
fn record_from_value(
    value: Value,
    path: &Path,
    index: usize,
) -> Result<ImplementationIdRecord, LoadError> {
    if !value.is_object() {
        return Err(parse_error(
            path,
            Some(index),
            format!("expected a record mapping, found {}", kind_of(&value)),
        ));
    }
    ImplementationIdRecord::deserialize(value).map_err(|e| parse_error(path, Some(index), e))
}

/// Document format of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// YAML (also the fallback for unknown extensions).
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse records from an in-memory document.
///
/// The document must be a single record mapping or a sequence of record
/// mappings.
pub fn parse_records(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<Vec<ImplementationIdRecord>, LoadError> {
    let document: Value = match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(path, None, e))?
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(path, None, e))?
        }
    };

    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_from_value(item, path, index))
            .collect(),
        Value::Object(map) => Ok(vec![record_from_value(Value::Object(map), path, 0)?]),
        other => Err(parse_error(
            path,
            None,
            format!(
                "expected a record mapping or a sequence of record mappings, found {}",
                kind_of(&other)
            ),
        )),
    }
}

/// Read and parse every record in the file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<ImplementationIdRecord>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&content, DocumentFormat::from_path(path), path)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
