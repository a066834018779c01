//! Launcher generation and registration.
//!
//! The launcher is a small sh wrapper on the system PATH that activates the
//! installed virtual environment and delegates to the main program. It is
//! overwritten on every run, so it always resolves to the current install.

use crate::config::InstallConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::io;
use std::path::Path;

/// Render the launcher script for a configuration.
///
/// Arguments given to the launcher are forwarded unchanged (`"$@"`), and
/// `exec` replaces the wrapper process with the program.
pub fn render(config: &InstallConfig) -> String {
    format!(
        "#!/bin/sh\n\
         # Generated by pdfiler-setup {version}. Overwritten on reinstall.\n\
         . '{activate}'\n\
         exec python3 '{program}' \"$@\"\n",
        version = env!("CARGO_PKG_VERSION"),
        activate = config.venv_activate().display(),
        program = config.program_path().display(),
    )
}

/// Write the launcher and mark it and the main program executable.
pub fn install(config: &InstallConfig) -> Result<()> {
    let path = &config.launcher_path;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| privilege_or_io(e, path))?;
    }

    fs::write(path, render(config)).map_err(|e| privilege_or_io(e, path))?;
    set_executable(path)?;
    set_executable(&config.program_path())?;

    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(SetupError::Io)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> InstallConfig {
        InstallConfig {
            install_dir: root.join("opt/pdfiler"),
            launcher_path: root.join("bin/pdfiler"),
            ..Default::default()
        }
    }

    #[test]
    fn rendered_launcher_activates_venv_and_forwards_args() {
        let config = InstallConfig::default();
        let script = render(&config);

        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(". '/usr/local/pdfiler/venv/bin/activate'"));
        assert!(script.contains("exec python3 '/usr/local/pdfiler/pdfiler.py' \"$@\""));
    }

    #[test]
    fn rendered_launcher_tracks_configured_paths() {
        let config = InstallConfig {
            install_dir: PathBuf::from("/tmp/elsewhere"),
            ..Default::default()
        };
        let script = render(&config);

        assert!(script.contains("/tmp/elsewhere/venv/bin/activate"));
        assert!(script.contains("/tmp/elsewhere/pdfiler.py"));
    }

    #[test]
    fn install_writes_launcher_and_creates_parent() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        fs::create_dir_all(&config.install_dir).unwrap();
        fs::write(config.program_path(), "print('pdfiler')\n").unwrap();

        install(&config).unwrap();

        let content = fs::read_to_string(&config.launcher_path).unwrap();
        assert!(content.contains("\"$@\""));
    }

    #[test]
    fn install_overwrites_an_existing_launcher() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        fs::create_dir_all(&config.install_dir).unwrap();
        fs::create_dir_all(config.launcher_path.parent().unwrap()).unwrap();
        fs::write(config.program_path(), "print('pdfiler')\n").unwrap();
        fs::write(&config.launcher_path, "#!/bin/sh\n# stale launcher\n").unwrap();

        install(&config).unwrap();

        let content = fs::read_to_string(&config.launcher_path).unwrap();
        assert!(!content.contains("stale launcher"));
        assert!(content.contains("exec python3"));
    }

    #[test]
    #[cfg(unix)]
    fn install_marks_launcher_and_program_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        fs::create_dir_all(&config.install_dir).unwrap();
        fs::write(config.program_path(), "print('pdfiler')\n").unwrap();

        install(&config).unwrap();

        for path in [&config.launcher_path, &config.program_path()] {
            let mode = fs::metadata(path).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111, "{} not executable", path.display());
        }
    }

    #[test]
    fn install_fails_when_program_file_is_absent() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        // install dir exists but was never deployed into
        fs::create_dir_all(&config.install_dir).unwrap();

        let err = install(&config).unwrap_err();
        assert!(matches!(err, SetupError::Io(_)));
    }
}
