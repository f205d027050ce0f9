//! Error types for bucket-scan operations.
//!
//! This module defines [`ScanError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural absence (no `current`, no `plugins`) is not an error at all
//! - A failed registration is a [`ScanError::RegistryFailed`] scoped to one shim;
//!   the walker reports it and moves on
//! - A missing root is fatal for the whole run
//! - Use `anyhow::Error` (via `ScanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bucket-scan operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory to scan does not exist or is not a directory.
    #[error("Root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The shim registry rejected or could not perform a registration.
    #[error("Failed to register shim '{shim}': {message}")]
    RegistryFailed { shim: String, message: String },

    /// External command could not be started.
    #[error("Failed to run '{command}': {source}")]
    CommandSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bucket-scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
