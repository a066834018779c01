//! Requirement detection and installation.
//!
//! The preflight phase checks that the system-level prerequisites of the
//! installation (source-control tool, language runtime, virtual-environment
//! module) are present, and installs missing ones through the system package
//! manager.
//!
//! # Modules
//!
//! - [`registry`] - The fixed set of requirements and their checks
//! - [`checker`] - Per-run cached requirement evaluation
//! - [`installer`] - apt-based installation of missing requirements

pub mod checker;
pub mod installer;
pub mod registry;

pub use checker::{RequirementStatus, ToolChecker};
pub use installer::AptInstaller;
pub use registry::{Requirement, RequirementCheck, RequirementRegistry};
