//! Cached requirement evaluation.
//!
//! The `ToolChecker` evaluates whether requirements are met, caching results
//! within a run so the same requirement checked multiple times only executes
//! its command once.

use crate::error::Result;
use crate::requirements::registry::Requirement;
use crate::shell::CommandResult;
use regex::Regex;
use std::collections::HashMap;

/// Outcome of a requirement check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// The requirement is present. The version is extracted from the check
    /// output when one is printed (e.g. `git version 2.43.0`).
    Satisfied { version: Option<String> },

    /// The check failed; the requirement needs installation.
    Missing,
}

impl RequirementStatus {
    /// Whether the requirement is present.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }
}

/// Checks whether requirements are satisfied on the system.
///
/// Caches results per-run. After an installation attempt the caller must
/// [`invalidate`](Self::invalidate) the requirement before re-checking.
#[derive(Debug, Default)]
pub struct ToolChecker {
    cache: HashMap<String, RequirementStatus>,
}

impl ToolChecker {
    /// Create a new checker with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a single requirement, using the cache when available.
    pub fn check(
        &mut self,
        requirement: &Requirement,
        mut run: impl FnMut(&str) -> Result<CommandResult>,
    ) -> Result<RequirementStatus> {
        if let Some(cached) = self.cache.get(requirement.name) {
            return Ok(cached.clone());
        }

        let result = run(&requirement.check.command())?;
        let status = if result.success {
            RequirementStatus::Satisfied {
                version: extract_version(&result.stdout),
            }
        } else {
            RequirementStatus::Missing
        };

        self.cache
            .insert(requirement.name.to_string(), status.clone());
        Ok(status)
    }

    /// Invalidate a cached result for a specific requirement.
    pub fn invalidate(&mut self, requirement: &str) {
        self.cache.remove(requirement);
    }

    /// Whether a requirement has a cached result.
    #[cfg(test)]
    pub(crate) fn is_cached(&self, requirement: &str) -> bool {
        self.cache.contains_key(requirement)
    }
}

/// Extract a dotted version number from check output.
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)*)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
