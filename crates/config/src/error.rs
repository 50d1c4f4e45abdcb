//! Error types for the configuration bootstrapper.
//!
//! Responsibilities:
//! - Define error variants for every bootstrap failure.
//! - Map `dotenvy` errors to variants that never carry raw `.env` content.
//!
//! Does NOT handle:
//! - Process exit codes (see `Bootstrapper::run_or_exit` and the CLI).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, names, error kinds).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - A missing `.env` file is not an error; it is `LoadOutcome::Missing`.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while bootstrapping a project's environment.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Invalid project name '{0}': must be a single non-empty path component")]
    InvalidProjectName(String),

    #[error("Invalid required variable '{spec}': {message}")]
    InvalidVariable { spec: String, message: String },

    #[error("Unable to determine home directory to expand '{0}'")]
    HomeDirUnavailable(String),

    #[error("Failed to create config directory at {path}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create .env file at {path}")]
    EnvFileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write .env file at {path}")]
    EnvFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to interact with the terminal: {0}")]
    Prompt(#[source] std::io::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse .env file at {path} (position {error_index})")]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file at {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file at {path}")]
    DotenvUnknown { path: PathBuf },

    #[error(".env file at {path} was created but could not be found on reload")]
    EnvFileVanished { path: PathBuf },

    #[error("Creation of .env file at {path} was declined")]
    Declined { path: PathBuf },
}

impl BootstrapError {
    /// Converts a `dotenvy` error for `path` without leaking line contents.
    pub(crate) fn from_dotenv(path: PathBuf, error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                BootstrapError::DotenvParse { path, error_index }
            }
            dotenvy::Error::Io(io_err) => BootstrapError::DotenvIo {
                path,
                kind: io_err.kind(),
            },
            _ => BootstrapError::DotenvUnknown { path },
        }
    }

    /// Returns true if the user declined to create the `.env` file.
    pub fn is_declined(&self) -> bool {
        matches!(self, BootstrapError::Declined { .. })
    }
}
