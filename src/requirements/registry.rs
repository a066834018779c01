//! The fixed requirement registry.

/// How a requirement's presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementCheck {
    /// Satisfied when the command exits 0.
    CommandSucceeds(&'static str),

    /// Satisfied when the named package is present in the dpkg database.
    PackageInstalled(&'static str),
}

impl RequirementCheck {
    /// The shell command that performs this check.
    pub fn command(&self) -> String {
        match self {
            Self::CommandSucceeds(cmd) => (*cmd).to_string(),
            Self::PackageInstalled(pkg) => format!("dpkg -s {}", pkg),
        }
    }
}

/// A system-level prerequisite of the installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Display name.
    pub name: &'static str,

    /// Presence check.
    pub check: RequirementCheck,

    /// Package installed via apt when the check fails.
    pub apt_package: &'static str,
}

/// The set of requirements checked before installation begins.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
}

impl RequirementRegistry {
    /// The preflight set: git, python3, and the venv module.
    pub fn preflight() -> Self {
        Self {
            requirements: vec![
                Requirement {
                    name: "git",
                    check: RequirementCheck::CommandSucceeds("git --version"),
                    apt_package: "git",
                },
                Requirement {
                    name: "python3",
                    check: RequirementCheck::CommandSucceeds("python3 --version"),
                    apt_package: "python3",
                },
                Requirement {
                    name: "python3-venv",
                    check: RequirementCheck::PackageInstalled("python3-venv"),
                    apt_package: "python3-venv",
                },
            ],
        }
    }

    /// All requirements, in check order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Look up a requirement by name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }
}
