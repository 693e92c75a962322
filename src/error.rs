//! Custom error types for statement-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for statement-cli operations
#[derive(Error, Debug)]
pub enum StatementError {
    /// Input file does not exist; reported before any read is attempted
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input exists but could not be parsed as tabular data
    #[error("Failed to read ledger: {0}")]
    Read(String),

    /// A required header column is absent from the input
    #[error("Required column not found in input: {0}")]
    MissingColumn(&'static str),

    /// File extension is not a supported tabular format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Output could not be persisted
    #[error("Failed to write report: {0}")]
    Write(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl StatementError {
    /// Create a `FileNotFound` error for a path
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Wrap an underlying read failure with its cause
    pub fn read(cause: impl std::fmt::Display) -> Self {
        Self::Read(cause.to_string())
    }

    /// Wrap an underlying write failure with its cause
    pub fn write(cause: impl std::fmt::Display) -> Self {
        Self::Write(cause.to_string())
    }

    /// Check if this error occurred on the read path
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::Read(_) | Self::MissingColumn(_)
        )
    }

    /// Check if this error occurred on the write path
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for StatementError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StatementError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for statement-cli operations
pub type StatementResult<T> = Result<T, StatementError>;
