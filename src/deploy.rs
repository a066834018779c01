//! Deployment of the acquired source into the install directory.
//!
//! The copy is additive: files from the clone overwrite their counterparts,
//! but prior contents of the install directory are never cleared first. A
//! leftover file from an earlier install therefore survives until something
//! with the same name replaces it.

use crate::error::{Result, SetupError};
use std::fs;
use std::io;
use std::path::Path;

/// Copy the clone's contents into the install directory.
///
/// Top-level dot-entries (the `.git` tree among them) stay behind. Write
/// failures on system paths surface as [`SetupError::PrivilegeRequired`].
pub fn deploy(clone_dir: &Path, install_dir: &Path) -> Result<()> {
    fs::create_dir_all(install_dir).map_err(|e| privilege_or_io(e, install_dir))?;

    for entry in fs::read_dir(clone_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let src = entry.path();
        let dst = install_dir.join(&name);
        if entry.file_type()?.is_dir() {
            copy_dir_all(&src, &dst).map_err(|e| privilege_or_io(e, install_dir))?;
        } else {
            fs::copy(&src, &dst).map_err(|e| privilege_or_io(e, install_dir))?;
        }
    }

    Ok(())
}

fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn privilege_or_io(err: io::Error, path: &Path) -> SetupError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        SetupError::PrivilegeRequired {
            path: path.to_path_buf(),
        }
    } else {
        SetupError::Io(err)
    }
}
