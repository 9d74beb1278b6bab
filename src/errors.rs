//! Unified error types and result handling.
//!
//! A single crate-wide error enum keeps the failure taxonomy small: input
//! validation failures (user-correctable, rejected before any I/O), missing
//! identifiers, and store I/O failures. Everything else converts in via
//! `#[from]`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required or malformed field was rejected before touching the store.
    #[error("Validation failed for `{field}`: {message}")]
    Validation {
        /// The offending input field
        field: &'static str,
        /// Human-readable explanation
        message: String,
    },

    /// An operation targeted a license id that is not in the store.
    #[error("License not found: {id}")]
    LicenseNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The backing file could not be read.
    #[error("Failed to read store file {path}: {source}")]
    StoreRead {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The backing file could not be written.
    #[error("Failed to write store file {path}: {source}")]
    StoreWrite {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
