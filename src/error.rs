//! Error types for pdfiler-setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SetupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - Every error aborts the run: there are no retries and no rollback of
//!   completed steps

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required tool is missing and could not be installed.
    #[error("Missing tool '{tool}': {message}")]
    ToolMissing { tool: String, message: String },

    /// Installing a required tool via the package manager failed.
    #[error("Failed to install '{tool}': {message}")]
    ToolInstallFailed { tool: String, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Cloning the upstream repository failed.
    #[error("Failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// The dependency manifest expected inside the install directory is absent.
    #[error("Dependency manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    /// A write to a system-wide path was denied.
    #[error("Insufficient privileges to write {path} (re-run as root)")]
    PrivilegeRequired { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, SetupError>;
