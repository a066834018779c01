//! pdfiler-setup - Installer for the pdfiler image-to-PDF command line tool.
//!
//! pdfiler-setup provisions a host with pdfiler: it checks prerequisite
//! tools (installing missing ones through apt), clones the upstream
//! repository, deploys it system-wide, builds an isolated Python virtual
//! environment with the declared dependencies, and registers a launcher on
//! the system PATH.
//!
//! The sequence is fail-fast with no rollback; see [`installer::run`].
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Path and source configuration for a run
//! - [`deploy`] - Copying the acquired source into the install directory
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Step orchestration
//! - [`launcher`] - Launcher generation and registration
//! - [`provision`] - Virtual environment provisioning
//! - [`receipt`] - Install receipt written after a successful run
//! - [`requirements`] - Tool preflight and apt installation
//! - [`shell`] - Shell command execution
//! - [`source`] - Clone acquisition and cleanup
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use pdfiler_setup::config::InstallConfig;
//! use pdfiler_setup::launcher;
//!
//! // The generated launcher always forwards arguments unchanged.
//! let config = InstallConfig::default();
//! let script = launcher::render(&config);
//! assert!(script.contains("\"$@\""));
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod installer;
pub mod launcher;
pub mod provision;
pub mod receipt;
pub mod requirements;
pub mod shell;
pub mod source;
pub mod ui;

pub use error::{Result, SetupError};
