//! Error types for faqadmin.
//!
//! This module defines all error types used throughout the faqadmin crate,
//! providing path and field context for debugging and user-facing messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for faqadmin operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to read the backing file.
    #[error("failed to read FAQ data file at {path}: {source}")]
    DataFileRead {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backing file.
    #[error("failed to write FAQ data file at {path}: {source}")]
    DataFileWrite {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not parse as an FAQ collection.
    ///
    /// Malformed content never reads back as an empty collection.
    #[error("malformed FAQ data file at {path}: {source}")]
    DataFileParse {
        /// Path to the backing file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Validation Errors ===
    /// A required field was left empty when creating an entry.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed outside the backing file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for faqadmin operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing-field validation error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Check if this error is an entry validation failure.
    ///
    /// The admin screen surfaces these inline instead of aborting.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
