//! Per-project environment bootstrapping.
//!
//! This crate locates a project's `.env` file in the platform config
//! directory, creates it interactively when missing, and loads it into the
//! environment before the rest of the application starts.

mod bootstrap;
pub mod constants;
mod creator;
mod environment;
mod error;
mod loader;
mod paths;
mod prompt;
mod types;

pub use bootstrap::{BootstrapOutcome, Bootstrapper};
pub use creator::create_env_file;
pub use environment::{Environment, MapEnv, Platform, ProcessEnv, env_var_or_none};
pub use error::BootstrapError;
pub use loader::{EnvFileLoader, LoadOutcome};
pub use paths::{config_dir_for, env_file_path, expand_tilde, resolve_config_dir};
pub use prompt::Prompter;
pub use types::RequiredVariable;
