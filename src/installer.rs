//! Installation orchestration.
//!
//! Runs the six-step sequence: tool preflight, source acquisition,
//! deployment, environment provisioning, launcher registration, cleanup.
//! The sequence is fail-fast with no rollback: the first failed step aborts
//! the run, and whatever earlier steps already wrote stays on disk (a
//! half-populated install directory is possible and documented).

use crate::config::InstallConfig;
use crate::error::{Result, SetupError};
use crate::receipt::{self, InstallReceipt};
use crate::requirements::{AptInstaller, Requirement, RequirementRegistry, ToolChecker};
use crate::shell::{self, CommandOptions, CommandResult, OutputCallback, OutputLine};
use crate::source;
use crate::ui::UserInterface;
use crate::{deploy, launcher, provision};
use std::path::PathBuf;

/// Options for an installer run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the step plan and execute nothing.
    pub dry_run: bool,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Tools the preflight installed (empty when everything was present).
    pub tools_installed: Vec<String>,

    /// Whether the source was freshly cloned (false: existing clone reused).
    pub cloned: bool,

    /// Where the launcher was registered.
    pub launcher_path: PathBuf,
}

/// Run the installation with the production command runner.
///
/// In verbose mode child command output is streamed to the terminal;
/// otherwise it is captured and only surfaces through logging and errors.
pub fn run(
    config: &InstallConfig,
    ui: &mut dyn UserInterface,
    opts: &RunOptions,
) -> Result<InstallReport> {
    let stream = ui.output_mode().shows_command_output();
    let mut runner = move |cmd: &str| -> Result<CommandResult> {
        tracing::debug!(command = cmd, "executing");
        if stream {
            let callback: OutputCallback = Box::new(|line| match line {
                OutputLine::Stdout(l) => println!("{}", l),
                OutputLine::Stderr(l) => eprintln!("{}", l),
            });
            shell::execute_streaming(cmd, &CommandOptions::default(), callback)
        } else {
            shell::execute_quiet(cmd, None)
        }
    };
    run_with_runner(config, ui, opts, &mut runner)
}

/// Run the installation with an injected command runner.
///
/// The runner receives every external command the run issues, which is what
/// makes the whole sequence testable without apt, git, or a network.
pub fn run_with_runner(
    config: &InstallConfig,
    ui: &mut dyn UserInterface,
    opts: &RunOptions,
    mut run: impl FnMut(&str) -> Result<CommandResult>,
) -> Result<InstallReport> {
    ui.show_header("pdfiler setup");

    if opts.dry_run {
        print_plan(config, ui);
        return Ok(InstallReport {
            tools_installed: Vec::new(),
            cloned: false,
            launcher_path: config.launcher_path.clone(),
        });
    }

    if config.uses_system_paths() && !shell::is_elevated() {
        ui.warning("not running as root; writes to the system paths will fail");
    }

    if let Ok(previous) = receipt::read_receipt(&config.install_dir) {
        tracing::debug!(
            version = %previous.installer_version,
            installed_at = %previous.installed_at,
            "existing install found"
        );
    }

    // Step 1: tool preflight
    let mut spinner = ui.start_spinner("Checking required tools");
    let tools_installed = match ensure_tools(&mut run) {
        Ok((installed, summary)) => {
            spinner.finish_success(&summary);
            installed
        }
        Err(e) => {
            spinner.finish_error("Tool preflight failed");
            return Err(e);
        }
    };

    // Step 2: source acquisition
    let mut spinner = ui.start_spinner("Fetching source");
    let outcome = match source::fetch(&config.repo_url, &config.clone_dir, &mut run) {
        Ok(outcome) => {
            if outcome.cloned {
                spinner.finish_success(&format!("Cloned into {}", config.clone_dir.display()));
            } else {
                spinner.finish_skipped(&format!(
                    "Using existing clone at {}",
                    config.clone_dir.display()
                ));
            }
            outcome
        }
        Err(e) => {
            spinner.finish_error("Clone failed");
            return Err(e);
        }
    };

    // Step 3: deployment
    let mut spinner = ui.start_spinner(&format!("Deploying to {}", config.install_dir.display()));
    match deploy::deploy(&config.clone_dir, &config.install_dir) {
        Ok(()) => spinner.finish_success(&format!("Deployed to {}", config.install_dir.display())),
        Err(e) => {
            spinner.finish_error("Deployment failed");
            return Err(e);
        }
    }

    // Step 4: environment provisioning
    let mut spinner = ui.start_spinner("Provisioning virtual environment");
    match provision::provision(config, &mut run) {
        Ok(()) => spinner.finish_success("Virtual environment ready"),
        Err(e) => {
            spinner.finish_error("Provisioning failed");
            return Err(e);
        }
    }

    // Step 5: launcher registration
    let mut spinner = ui.start_spinner("Registering launcher");
    match launcher::install(config) {
        Ok(()) => {
            spinner.finish_success(&format!("Launcher at {}", config.launcher_path.display()))
        }
        Err(e) => {
            spinner.finish_error("Launcher registration failed");
            return Err(e);
        }
    }

    receipt::write_receipt(
        &config.install_dir,
        &InstallReceipt::new(&config.repo_url, outcome.cloned),
    )?;

    // Step 6: cleanup
    let mut spinner = ui.start_spinner("Cleaning up");
    match source::cleanup(&config.clone_dir, outcome.cloned) {
        Ok(()) => spinner.finish_success("Removed temporary clone"),
        Err(e) => {
            spinner.finish_error("Cleanup failed");
            return Err(e);
        }
    }

    ui.success(&format!(
        "pdfiler installed; launcher registered at {}",
        config.launcher_path.display()
    ));

    Ok(InstallReport {
        tools_installed,
        cloned: outcome.cloned,
        launcher_path: config.launcher_path.clone(),
    })
}

/// Check every requirement, installing missing ones via apt.
///
/// Returns the tools that had to be installed plus a one-line summary with
/// the versions the checks reported.
fn ensure_tools(
    run: &mut impl FnMut(&str) -> Result<CommandResult>,
) -> Result<(Vec<String>, String)> {
    let registry = RequirementRegistry::preflight();
    let mut checker = ToolChecker::new();
    let mut apt = AptInstaller::new();
    let mut installed = Vec::new();
    let mut parts = Vec::new();

    for req in registry.requirements() {
        let status = checker.check(req, &mut *run)?;
        let status = if status.is_satisfied() {
            status
        } else {
            tracing::info!(tool = req.name, package = req.apt_package, "installing");
            apt.install(req, &mut *run)?;
            checker.invalidate(req.name);
            let rechecked = checker.check(req, &mut *run)?;
            if !rechecked.is_satisfied() {
                return Err(SetupError::ToolMissing {
                    tool: req.name.to_string(),
                    message: format!("'{}' still failing after package install", req.name),
                });
            }
            installed.push(req.name.to_string());
            rechecked
        };

        parts.push(describe(req, &status));
    }

    Ok((installed, format!("Tools ready ({})", parts.join(", "))))
}

fn describe(req: &Requirement, status: &crate::requirements::RequirementStatus) -> String {
    match status {
        crate::requirements::RequirementStatus::Satisfied {
            version: Some(version),
        } => format!("{} {}", req.name, version),
        _ => req.name.to_string(),
    }
}

/// Print the step plan for `--dry-run`.
fn print_plan(config: &InstallConfig, ui: &mut dyn UserInterface) {
    ui.message("Dry-run: printing the step plan, executing nothing.");
    ui.message("  1. Check required tools (git, python3, python3-venv); install missing ones with apt-get");
    ui.message(&format!(
        "  2. git clone {} into {} (skipped if the directory exists)",
        config.repo_url,
        config.clone_dir.display()
    ));
    ui.message(&format!(
        "  3. Copy the clone into {}",
        config.install_dir.display()
    ));
    ui.message(&format!(
        "  4. Create {} and install {}",
        config.venv_dir().display(),
        config.manifest_path().display()
    ));
    ui.message(&format!(
        "  5. Write the launcher to {} and mark it executable",
        config.launcher_path.display()
    ));
    ui.message(&format!(
        "  6. Remove {} (even when step 2 was skipped)",
        config.clone_dir.display()
    ));
}
