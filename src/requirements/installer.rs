//! Installation of missing requirements via the system package manager.
//!
//! The original installation flow targets Debian-family hosts: a missing
//! tool is resolved by refreshing the apt package index and installing the
//! requirement's package. The index refresh runs at most once per run.

use crate::error::{Result, SetupError};
use crate::requirements::registry::Requirement;
use crate::shell::CommandResult;

/// Installs missing requirements through apt.
#[derive(Debug, Default)]
pub struct AptInstaller {
    index_updated: bool,
}

impl AptInstaller {
    /// Create a new installer; the package index has not been refreshed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the requirement's package.
    ///
    /// Runs `apt-get update` first if this run has not refreshed the index
    /// yet. Any failure (network, permission, unknown package) aborts with
    /// [`SetupError::ToolInstallFailed`].
    pub fn install(
        &mut self,
        requirement: &Requirement,
        mut run: impl FnMut(&str) -> Result<CommandResult>,
    ) -> Result<()> {
        if !self.index_updated {
            let result = run("apt-get update")?;
            if !result.success {
                return Err(SetupError::ToolInstallFailed {
                    tool: requirement.name.to_string(),
                    message: failure_message("apt-get update", &result),
                });
            }
            self.index_updated = true;
        }

        let install_cmd = format!("apt-get install -y {}", requirement.apt_package);
        let result = run(&install_cmd)?;
        if !result.success {
            return Err(SetupError::ToolInstallFailed {
                tool: requirement.name.to_string(),
                message: failure_message(&install_cmd, &result),
            });
        }

        Ok(())
    }
}

fn failure_message(command: &str, result: &CommandResult) -> String {
    let stderr = result.stderr.trim();
    if stderr.is_empty() {
        format!("'{}' exited with code {:?}", command, result.exit_code)
    } else {
        format!(
            "'{}' exited with code {:?}: {}",
            command, result.exit_code, stderr
        )
    }
}
