//! Loader for the project's `.env` file.
//!
//! Responsibilities:
//! - Parse `<config_dir>/.env` with `dotenvy` and apply entries to an `Environment`.
//! - Report a missing file as `LoadOutcome::Missing` with a user-visible warning.
//!
//! Does NOT handle:
//! - Creating the file (see `creator.rs`).
//! - Validating that required variables are present.
//!
//! Invariants:
//! - The loader never writes to disk.
//! - The whole file is parsed before any variable is applied; a malformed file
//!   leaves the environment untouched.
//! - Existing variables win unless `override_existing(true)` is set.
//! - Error messages never include raw .env line contents.
//! - Unescaped `$NAME`/`${NAME}` references in a hand-edited file are expanded
//!   by dotenvy from the process environment, then from earlier entries in the
//!   same file. The injected `Environment` is not consulted. Files written by
//!   `creator.rs` escape every `$`, so they never expand.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::environment::Environment;
use crate::error::BootstrapError;
use crate::paths::env_file_path;
use crate::prompt::Prompter;

/// Result of attempting to load the `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and its entries were applied.
    Loaded {
        path: PathBuf,
        /// Keys found in the file, in file order.
        keys: Vec<String>,
    },
    /// No file exists at `path`.
    Missing { path: PathBuf },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadOutcome::Loaded { path, .. } | LoadOutcome::Missing { path } => path,
        }
    }
}

/// Applies a project's `.env` file to an environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvFileLoader {
    override_existing: bool,
}

impl EnvFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace variables that are already set instead of keeping them.
    pub fn override_existing(mut self, enabled: bool) -> Self {
        self.override_existing = enabled;
        self
    }

    /// Loads `<config_dir>/.env` into `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`BootstrapError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`BootstrapError::DotenvIo`)
    /// - Status output cannot be written (`BootstrapError::Prompt`)
    ///
    /// A missing `.env` file is reported as `LoadOutcome::Missing`.
    pub fn load<E, R, W>(
        &self,
        config_dir: &Path,
        env: &mut E,
        prompter: &mut Prompter<R, W>,
    ) -> Result<LoadOutcome, BootstrapError>
    where
        E: Environment + ?Sized,
        R: BufRead,
        W: Write,
    {
        let path = env_file_path(config_dir);

        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) if is_not_found(&e) => {
                tracing::warn!(path = %path.display(), "No .env file found");
                prompter.say(&format!(
                    "⚠️  No .env file found at {}. Please create one.",
                    config_dir.display()
                ))?;
                return Ok(LoadOutcome::Missing { path });
            }
            Err(e) => return Err(BootstrapError::from_dotenv(path, e)),
        };

        let mut applied = 0usize;
        let mut keys = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            if self.override_existing || env.var(&key).is_none() {
                env.set_var(&key, &value);
                applied += 1;
            }
            keys.push(key);
        }

        tracing::info!(
            path = %path.display(),
            found = keys.len(),
            applied,
            "Loaded .env file"
        );
        prompter.say(&format!(
            "✅ Loaded environment variables from {}",
            config_dir.display()
        ))?;

        Ok(LoadOutcome::Loaded { path, keys })
    }
}

fn read_entries(path: &Path) -> Result<Vec<(String, String)>, dotenvy::Error> {
    dotenvy::from_path_iter(path)?.collect()
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnv;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn quiet_prompter() -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_existing_file_populates_environment() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".env"),
            "API_KEY=abc123\nTIMEOUT=30\n\nREGION=eu-west-1\n",
        )
        .unwrap();

        let mut env = MapEnv::new();
        let mut prompter = quiet_prompter();
        let outcome = EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut prompter)
            .unwrap();

        assert!(outcome.is_loaded());
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                path: temp_dir.path().join(".env"),
                keys: vec!["API_KEY".into(), "TIMEOUT".into(), "REGION".into()],
            }
        );
        assert_eq!(env.var("API_KEY").as_deref(), Some("abc123"));
        assert_eq!(env.var("TIMEOUT").as_deref(), Some("30"));
        assert_eq!(env.var("REGION").as_deref(), Some("eu-west-1"));
        assert!(output_of(prompter).contains("✅ Loaded environment variables from"));
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "DSN=postgres://u:p@h/db?a=b\n").unwrap();

        let mut env = MapEnv::new();
        EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();

        assert_eq!(env.var("DSN").as_deref(), Some("postgres://u:p@h/db?a=b"));
    }

    #[test]
    fn test_missing_file_warns_and_leaves_environment_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut env = MapEnv::new().with_var("EXISTING", "1");
        let before = env.clone();

        let mut prompter = quiet_prompter();
        let outcome = EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut prompter)
            .unwrap();

        assert!(!outcome.is_loaded());
        assert_eq!(outcome.path(), temp_dir.path().join(".env"));
        assert_eq!(env, before);
        assert!(output_of(prompter).contains("No .env file found at"));
    }

    #[test]
    fn test_existing_values_are_kept_by_default() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "MODE=file\n").unwrap();

        let mut env = MapEnv::new().with_var("MODE", "shell");
        EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();

        assert_eq!(env.var("MODE").as_deref(), Some("shell"));
    }

    #[test]
    fn test_override_existing_replaces_values() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "MODE=file\n").unwrap();

        let mut env = MapEnv::new().with_var("MODE", "shell");
        EnvFileLoader::new()
            .override_existing(true)
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();

        assert_eq!(env.var("MODE").as_deref(), Some("file"));
    }

    #[test]
    fn test_first_duplicate_wins_without_override() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "KEY=first\nKEY=second\n").unwrap();

        let mut env = MapEnv::new();
        EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();

        assert_eq!(env.var("KEY").as_deref(), Some("first"));
    }

    #[test]
    fn test_malformed_file_is_rejected_without_partial_application() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".env"),
            "GOOD=1\nSECRET_LINE_WITHOUT_EQUALS\n",
        )
        .unwrap();

        let mut env = MapEnv::new();
        let err = EnvFileLoader::new()
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap_err();

        assert!(matches!(err, BootstrapError::DotenvParse { .. }));
        assert!(!err.to_string().contains("SECRET_LINE_WITHOUT_EQUALS"));
        assert!(env.is_empty());
    }

    #[test]
    fn test_loading_twice_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "A=1\n").unwrap();

        let loader = EnvFileLoader::new();
        let mut env = MapEnv::new();
        let first = loader
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();
        let snapshot = env.clone();
        let second = loader
            .load(temp_dir.path(), &mut env, &mut quiet_prompter())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(env, snapshot);
    }
}
