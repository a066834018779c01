//! Virtual environment provisioning.
//!
//! Creates the venv inside the install directory, upgrades pip, and installs
//! the dependency manifest. A missing manifest aborts before pip runs, which
//! keeps the launcher registration step from ever seeing a half-provisioned
//! environment.

use crate::config::InstallConfig;
use crate::error::{Result, SetupError};
use crate::shell::CommandResult;

/// Provision the isolated runtime environment.
pub fn provision(
    config: &InstallConfig,
    mut run: impl FnMut(&str) -> Result<CommandResult>,
) -> Result<()> {
    let venv = config.venv_dir();
    let pip = config.venv_pip();

    run_checked(
        &format!("python3 -m venv '{}'", venv.display()),
        &mut run,
    )?;

    run_checked(
        &format!("'{}' install --upgrade pip", pip.display()),
        &mut run,
    )?;

    let manifest = config.manifest_path();
    if !manifest.exists() {
        return Err(SetupError::ManifestMissing { path: manifest });
    }

    run_checked(
        &format!("'{}' install -r '{}'", pip.display(), manifest.display()),
        &mut run,
    )?;

    Ok(())
}

fn run_checked(
    command: &str,
    run: &mut impl FnMut(&str) -> Result<CommandResult>,
) -> Result<CommandResult> {
    let result = run(command)?;
    if !result.success {
        let stderr = result.stderr.trim();
        if !stderr.is_empty() {
            tracing::debug!(command, stderr, "provisioning command failed");
        }
        return Err(SetupError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        });
    }
    Ok(result)
}
