//! CLI argument definitions.
//!
//! The installer takes no required arguments and has no subcommands: a bare
//! invocation performs the full installation sequence. The flags below are
//! output controls plus path/URL overrides for the configuration in
//! [`crate::config::InstallConfig`].

use crate::config::InstallConfig;
use clap::Parser;
use std::path::PathBuf;

/// pdfiler-setup - Installer for the pdfiler image-to-PDF tool.
#[derive(Debug, Parser)]
#[command(name = "pdfiler-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Upstream repository to install from
    #[arg(long, env = "PDFILER_REPO_URL", value_name = "URL")]
    pub repo_url: Option<String>,

    /// Directory for the temporary clone (removed after a successful run)
    #[arg(long, env = "PDFILER_CLONE_DIR", value_name = "DIR")]
    pub clone_dir: Option<PathBuf>,

    /// Installation directory
    #[arg(long, env = "PDFILER_INSTALL_DIR", value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Path the launcher executable is written to
    #[arg(long, env = "PDFILER_LAUNCHER_PATH", value_name = "PATH")]
    pub launcher: Option<PathBuf>,

    /// Print the step plan without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Show verbose output (stream command output)
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the run configuration, applying any overrides over the defaults.
    pub fn install_config(&self) -> InstallConfig {
        let mut config = InstallConfig::default();
        if let Some(url) = &self.repo_url {
            config.repo_url = url.clone();
        }
        if let Some(dir) = &self.clone_dir {
            config.clone_dir = dir.clone();
        }
        if let Some(dir) = &self.install_dir {
            config.install_dir = dir.clone();
        }
        if let Some(path) = &self.launcher {
            config.launcher_path = path.clone();
        }
        config
    }
}
