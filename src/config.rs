//! Installation configuration.
//!
//! Every path the installer touches flows through [`InstallConfig`] so that
//! tests (and cautious operators) can redirect the whole run into a scratch
//! root. The defaults reproduce the fixed paths of the stock installation:
//! clone into `$HOME/pdfiler`, install to `/usr/local/pdfiler`, register the
//! launcher at `/usr/local/bin/pdfiler`.

use std::path::{Path, PathBuf};

/// Upstream repository the installer clones from.
pub const DEFAULT_REPO_URL: &str = "https://github.com/pdfiler/pdfiler.git";

/// System-wide installation directory.
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/pdfiler";

/// Launcher path on the system PATH.
pub const DEFAULT_LAUNCHER_PATH: &str = "/usr/local/bin/pdfiler";

/// Name of the virtual environment directory inside the install directory.
pub const VENV_DIR: &str = "venv";

/// Dependency manifest expected at the install directory root.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Main program file the launcher delegates to.
pub const PROGRAM_FILE: &str = "pdfiler.py";

/// Paths and source location for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Upstream repository URL.
    pub repo_url: String,

    /// Temporary clone directory (removed at the end of a successful run).
    pub clone_dir: PathBuf,

    /// Installation target directory.
    pub install_dir: PathBuf,

    /// Path the launcher executable is written to.
    pub launcher_path: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            clone_dir: default_clone_dir(),
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            launcher_path: PathBuf::from(DEFAULT_LAUNCHER_PATH),
        }
    }
}

impl InstallConfig {
    /// Virtual environment directory inside the install directory.
    pub fn venv_dir(&self) -> PathBuf {
        self.install_dir.join(VENV_DIR)
    }

    /// The venv's pip executable.
    pub fn venv_pip(&self) -> PathBuf {
        self.venv_dir().join("bin").join("pip")
    }

    /// The venv's activation script, sourced by the launcher.
    pub fn venv_activate(&self) -> PathBuf {
        self.venv_dir().join("bin").join("activate")
    }

    /// Dependency manifest consumed by the provisioning step.
    pub fn manifest_path(&self) -> PathBuf {
        self.install_dir.join(MANIFEST_FILE)
    }

    /// Main program file inside the install directory.
    pub fn program_path(&self) -> PathBuf {
        self.install_dir.join(PROGRAM_FILE)
    }

    /// Whether this configuration writes to system-wide locations.
    ///
    /// Used only to warn up front when the process is not elevated; the
    /// actual privilege failure still surfaces at the step that hits it.
    pub fn uses_system_paths(&self) -> bool {
        is_system_path(&self.install_dir) || is_system_path(&self.launcher_path)
    }
}

fn is_system_path(path: &Path) -> bool {
    ["/usr", "/opt", "/etc", "/bin", "/sbin", "/lib"]
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

fn default_clone_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pdfiler")
}
