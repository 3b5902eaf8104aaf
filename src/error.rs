//! Error types for node-pkg-info operations.
//!
//! This module defines [`NodePkgError`], the error type shared by every
//! component, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error is fatal to the invocation; nothing is retried
//! - Use `anyhow::Error` (via `NodePkgError::Other`) for unexpected errors
//! - [`NodePkgError::exit_code`] maps each kind to the process exit status

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for node-pkg-info operations.
#[derive(Debug, Error)]
pub enum NodePkgError {
    /// Manifest path was given but does not name a file.
    #[error("Nonexistent package.json at package_manifest_path: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest content is not valid JSON or has the wrong shape.
    #[error("Failed to parse manifest at {}: {message}", .path.display())]
    ManifestParseError { path: PathBuf, message: String },

    /// The package query command is missing or exited unsuccessfully.
    #[error("Dependency query for '{package}' failed: {message}")]
    QueryFailure { package: String, message: String },

    /// A manifest-dependent operation was selected without a manifest path.
    #[error("Operation '{operation}' requires a package manifest path")]
    MissingManifest { operation: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NodePkgError {
    /// Process exit status for this error.
    ///
    /// Usage errors exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingManifest { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for node-pkg-info operations.
pub type Result<T> = std::result::Result<T, NodePkgError>;
