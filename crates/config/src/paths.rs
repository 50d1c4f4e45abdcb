//! Path helpers for the project configuration directory.
//!
//! Responsibilities:
//! - Compute the platform-appropriate config directory for a project.
//! - Expand a leading `~` against the environment's home directory.
//! - Create the directory (and parents) on demand.
//!
//! Does NOT handle:
//! - Reading or writing the `.env` file (see `loader.rs` and `creator.rs`).
//!
//! Invariants:
//! - Blank `APPDATA` / `XDG_CONFIG_HOME` values fall back to the constants.
//! - `resolve_config_dir` is idempotent; an existing directory is not an error.

use std::path::{Path, PathBuf};

use crate::constants::{
    APPDATA_VAR, ENV_FILE_NAME, WINDOWS_APPDATA_FALLBACK, XDG_CONFIG_HOME_FALLBACK,
    XDG_CONFIG_HOME_VAR,
};
use crate::environment::{Environment, Platform, env_var_or_none};
use crate::error::BootstrapError;

/// Returns the config directory for `project` without touching the filesystem.
///
/// - Windows: `%APPDATA%\<project>` (fallback `C:\Users\Default\AppData\Roaming`)
/// - Otherwise: `$XDG_CONFIG_HOME/<project>` (fallback `~/.config/<project>`)
pub fn config_dir_for<E: Environment + ?Sized>(
    project: &str,
    env: &E,
    platform: Platform,
) -> Result<PathBuf, BootstrapError> {
    validate_project_name(project)?;

    let base = match platform {
        Platform::Windows => PathBuf::from(
            env_var_or_none(env, APPDATA_VAR).unwrap_or_else(|| WINDOWS_APPDATA_FALLBACK.into()),
        ),
        Platform::Unix => {
            let raw = env_var_or_none(env, XDG_CONFIG_HOME_VAR)
                .unwrap_or_else(|| XDG_CONFIG_HOME_FALLBACK.into());
            expand_tilde(&raw, env.home_dir().as_deref())?
        }
    };

    Ok(base.join(project))
}

/// Returns the config directory for `project`, creating it if absent.
pub fn resolve_config_dir<E: Environment + ?Sized>(
    project: &str,
    env: &E,
    platform: Platform,
) -> Result<PathBuf, BootstrapError> {
    let dir = config_dir_for(project, env, platform)?;

    if !dir.is_dir() {
        tracing::debug!(path = %dir.display(), "Creating config directory");
    }
    std::fs::create_dir_all(&dir).map_err(|source| BootstrapError::ConfigDirCreate {
        path: dir.clone(),
        source,
    })?;

    Ok(dir)
}

/// Returns the `.env` path inside `config_dir`.
pub fn env_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(ENV_FILE_NAME)
}

/// Expands a leading `~` or `~/` against `home`.
///
/// `~user` forms are returned unchanged.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> Result<PathBuf, BootstrapError> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };

    let home = home.ok_or_else(|| BootstrapError::HomeDirUnavailable(path.to_string()))?;
    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}

fn validate_project_name(project: &str) -> Result<(), BootstrapError> {
    let invalid = project.trim().is_empty()
        || project == "."
        || project == ".."
        || project.contains(['/', '\\']);

    if invalid {
        return Err(BootstrapError::InvalidProjectName(project.to_string()));
    }
    Ok(())
}
