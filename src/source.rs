//! Source acquisition and cleanup.
//!
//! The upstream repository is cloned into a temporary user-local directory.
//! Cloning is skipped when the directory already exists; nothing validates
//! the staleness or correctness of an existing clone. At the end of a
//! successful run the directory is removed unconditionally, including when
//! this run never cloned into it. That removal is part of the documented
//! contract and is logged with a warning rather than changed.

use crate::error::{Result, SetupError};
use crate::shell::CommandResult;
use std::fs;
use std::path::Path;

/// Outcome of the acquisition step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Whether this run performed the clone (false: directory pre-existed).
    pub cloned: bool,
}

/// Clone the repository into `clone_dir` unless the directory exists.
pub fn fetch(
    url: &str,
    clone_dir: &Path,
    mut run: impl FnMut(&str) -> Result<CommandResult>,
) -> Result<FetchOutcome> {
    if clone_dir.exists() {
        tracing::debug!(path = %clone_dir.display(), "clone directory exists, skipping clone");
        return Ok(FetchOutcome { cloned: false });
    }

    if let Some(parent) = clone_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let command = format!("git clone '{}' '{}'", url, clone_dir.display());
    let result = run(&command)?;
    if !result.success {
        let stderr = result.stderr.trim();
        return Err(SetupError::CloneFailed {
            url: url.to_string(),
            message: if stderr.is_empty() {
                format!("git clone exited with code {:?}", result.exit_code)
            } else {
                stderr.to_string()
            },
        });
    }

    Ok(FetchOutcome { cloned: true })
}

/// Remove the clone directory.
///
/// Runs unconditionally at the end of a successful installation. When the
/// directory pre-existed this run (the clone step was skipped) it is removed
/// all the same; a warning makes that visible.
pub fn cleanup(clone_dir: &Path, cloned_this_run: bool) -> Result<()> {
    if !clone_dir.exists() {
        return Ok(());
    }

    if !cloned_this_run {
        tracing::warn!(
            path = %clone_dir.display(),
            "removing clone directory that existed before this run"
        );
    }

    fs::remove_dir_all(clone_dir)?;
    Ok(())
}
