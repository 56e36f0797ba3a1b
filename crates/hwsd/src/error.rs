//! Error types for the hwsd crate.

use std::path::PathBuf;
use thiserror::Error;

use stac_types::ValidationIssue;

/// Errors that can occur while building or writing HWSD metadata.
#[derive(Error, Debug)]
pub enum HwsdError {
    #[error("Unknown HWSD variable: {0}")]
    UnknownVariable(String),

    #[error("gdal_translate failed for {input:?} -> {output:?} ({status}): {log}")]
    ConversionFailure {
        input: PathBuf,
        output: PathBuf,
        status: String,
        /// Captured stdout and stderr of the converter.
        log: String,
    },

    #[error("Destination folder {0:?} not found")]
    OutputPathMissing(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("STAC validation failed for {record}: {}", format_issues(.issues))]
    Validation {
        record: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for hwsd operations.
pub type Result<T> = std::result::Result<T, HwsdError>;
