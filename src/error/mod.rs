//! Error handling for career-graph.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for loading skill tables and producing recommendations
#[derive(Debug, thiserror::Error)]
pub enum CareerGraphError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error decoding CSV data or manipulating Arrow arrays
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    ParquetError(#[from] ParquetError),

    /// Error deserializing rows out of a record batch
    #[error("Row conversion error: {0}")]
    RowConversionError(#[from] serde_arrow::Error),

    /// Error (de)serializing JSON configuration or output
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A skill table is missing a required column or has the wrong layout
    #[error("Schema error in {}: {message}", path.display())]
    SchemaError { path: PathBuf, message: String },

    /// A `Skills Covered` cell could not be read as a percentage
    #[error("Invalid coverage value '{value}' for skill '{skill}'")]
    InvalidCoverage { skill: String, value: String },

    /// A required cell was null or empty
    #[error("Missing {column} value in row {row} of skill '{skill}'")]
    MissingValue {
        skill: String,
        column: &'static str,
        row: usize,
    },

    /// Two files in the data directory resolve to the same skill name
    #[error(
        "Skill '{skill}' is defined by more than one file ({} and {})",
        first.display(),
        second.display()
    )]
    DuplicateSkill {
        skill: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A background loading task failed to complete
    #[error("Task error: {0}")]
    TaskError(String),
}

impl CareerGraphError {
    /// Create a schema error for the given file
    pub fn schema_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SchemaError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with a message and the path it concerns
    pub fn io_error(kind: io::ErrorKind, message: impl AsRef<str>, path: &std::path::Path) -> Self {
        Self::IoError(io::Error::new(
            kind,
            format!("{}: {}", message.as_ref(), path.display()),
        ))
    }
}

impl From<tokio::task::JoinError> for CareerGraphError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::TaskError(error.to_string())
    }
}

/// Result type for career-graph operations
pub type Result<T> = std::result::Result<T, CareerGraphError>;
