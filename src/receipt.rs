//! Install receipt.
//!
//! A small JSON record written into the install directory at the end of a
//! run. It is informational only: nothing reads it to gate behavior, and no
//! versioning or rollback is built on top of it.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the receipt inside the install directory.
pub const RECEIPT_FILE: &str = ".install-receipt.json";

/// Record of a completed installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReceipt {
    /// Version of pdfiler-setup that performed the install.
    pub installer_version: String,

    /// Repository the source came from.
    pub repo_url: String,

    /// Whether this run cloned the source (false: an existing clone was used).
    pub cloned_fresh: bool,

    /// When the install completed.
    pub installed_at: DateTime<Utc>,
}

impl InstallReceipt {
    /// Build a receipt for the current run.
    pub fn new(repo_url: &str, cloned_fresh: bool) -> Self {
        Self {
            installer_version: env!("CARGO_PKG_VERSION").to_string(),
            repo_url: repo_url.to_string(),
            cloned_fresh,
            installed_at: Utc::now(),
        }
    }
}

/// Path of the receipt for an install directory.
pub fn receipt_path(install_dir: &Path) -> PathBuf {
    install_dir.join(RECEIPT_FILE)
}

/// Write the receipt, overwriting any previous one.
pub fn write_receipt(install_dir: &Path, receipt: &InstallReceipt) -> Result<()> {
    let json = serde_json::to_string_pretty(receipt).map_err(anyhow::Error::from)?;
    fs::write(receipt_path(install_dir), json)?;
    Ok(())
}

/// Read the receipt left by a previous run, if any.
pub fn read_receipt(install_dir: &Path) -> Result<InstallReceipt> {
    let raw = fs::read_to_string(receipt_path(install_dir))?;
    let receipt = serde_json::from_str(&raw).map_err(anyhow::Error::from)?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn receipt_path_is_inside_install_dir() {
        let path = receipt_path(Path::new("/usr/local/pdfiler"));
        assert_eq!(
            path,
            PathBuf::from("/usr/local/pdfiler/.install-receipt.json")
        );
    }

    #[test]
    fn receipt_round_trips_through_json() {
        let temp = TempDir::new().unwrap();
        let receipt = InstallReceipt::new("https://example.com/pdfiler.git", true);

        write_receipt(temp.path(), &receipt).unwrap();
        let loaded = read_receipt(temp.path()).unwrap();

        assert_eq!(loaded, receipt);
    }

    #[test]
    fn new_receipt_records_installer_version() {
        let receipt = InstallReceipt::new("https://example.com/pdfiler.git", false);
        assert_eq!(receipt.installer_version, env!("CARGO_PKG_VERSION"));
        assert!(!receipt.cloned_fresh);
    }

    #[test]
    fn write_overwrites_previous_receipt() {
        let temp = TempDir::new().unwrap();
        write_receipt(temp.path(), &InstallReceipt::new("https://old.example", true)).unwrap();
        write_receipt(temp.path(), &InstallReceipt::new("https://new.example", false)).unwrap();

        let loaded = read_receipt(temp.path()).unwrap();
        assert_eq!(loaded.repo_url, "https://new.example");
    }

    #[test]
    fn read_fails_when_no_receipt_exists() {
        let temp = TempDir::new().unwrap();
        assert!(read_receipt(temp.path()).is_err());
    }
}
