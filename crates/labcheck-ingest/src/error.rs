//! Error types for rule and patient file ingestion.

use std::path::PathBuf;

use labcheck_rules::RuleError;
use thiserror::Error;

/// Errors that can occur while loading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Row could not be split into the expected fields.
    #[error("failed to parse {path} line {line}: {message}")]
    TsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Field could not be converted to its expected type.
    #[error("invalid {field} value '{value}' in {path} line {line}")]
    MalformedField {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Field parsed but names an unsupported comparator.
    #[error("invalid rule in {path} line {line}")]
    Rule {
        path: PathBuf,
        line: u64,
        #[source]
        source: RuleError,
    },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
