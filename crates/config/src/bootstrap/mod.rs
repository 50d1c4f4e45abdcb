//! The configuration bootstrapper.
//!
//! Responsibilities:
//! - Resolve the project's config directory and load its `.env` file.
//! - When the file is missing, ask whether to create it, collect the required
//!   variables, write the file, and load it.
//! - Terminate the process (`run_or_exit`) when the user declines.
//!
//! Does NOT handle:
//! - Validating that an existing `.env` defines the required variables.
//! - Retrying any step; every failure is terminal for the call.
//!
//! Invariants / Assumptions:
//! - `run` returning `Ok` means the environment holds the file's variables.
//! - A declined creation never leaves a file behind.
//! - The environment, prompter and platform are injected, so nothing here
//!   touches global state unless the defaults are kept.

use std::io::{BufRead, Stdout, StdinLock, Write};
use std::path::PathBuf;

use crate::constants::{CREATE_CONFIRMATION, DECLINED_EXIT_CODE, OFFLINE_CONNECT_COMMAND};
use crate::creator::create_env_file;
use crate::environment::{Environment, Platform, ProcessEnv};
use crate::error::BootstrapError;
use crate::loader::{EnvFileLoader, LoadOutcome};
use crate::paths::{env_file_path, resolve_config_dir};
use crate::prompt::Prompter;
use crate::types::RequiredVariable;

/// How the environment was populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// An existing `.env` file was loaded without prompting.
    Loaded { path: PathBuf, keys: Vec<String> },
    /// The `.env` file was created interactively and then loaded.
    Created { path: PathBuf, keys: Vec<String> },
}

impl BootstrapOutcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            BootstrapOutcome::Loaded { path, .. } | BootstrapOutcome::Created { path, .. } => path,
        }
    }

    /// Keys found in the loaded file, in file order.
    pub fn keys(&self) -> &[String] {
        match self {
            BootstrapOutcome::Loaded { keys, .. } | BootstrapOutcome::Created { keys, .. } => keys,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, BootstrapOutcome::Created { .. })
    }
}

/// Locates, or interactively creates, a project's `.env` file and loads it.
///
/// # Example
///
/// ```rust,no_run
/// use envboot_config::Bootstrapper;
///
/// let outcome = Bootstrapper::new("myapp", [("API_KEY", "none"), ("TIMEOUT", "30")])
///     .run_or_exit()?;
/// println!("environment loaded from {}", outcome.path().display());
/// # Ok::<(), envboot_config::BootstrapError>(())
/// ```
#[derive(Debug)]
pub struct Bootstrapper<E = ProcessEnv, R = StdinLock<'static>, W = Stdout> {
    project_name: String,
    required_vars: Vec<RequiredVariable>,
    env: E,
    prompter: Prompter<R, W>,
    platform: Platform,
    loader: EnvFileLoader,
}

impl Bootstrapper {
    /// Creates a bootstrapper bound to the process environment and the terminal.
    pub fn new<I, V>(project_name: impl Into<String>, required_vars: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<RequiredVariable>,
    {
        Self::from_parts(project_name, required_vars, ProcessEnv, Prompter::stdio())
    }
}

impl<E, R, W> Bootstrapper<E, R, W>
where
    E: Environment,
    R: BufRead,
    W: Write,
{
    /// Creates a bootstrapper with an explicit environment and prompter.
    pub fn from_parts<I, V>(
        project_name: impl Into<String>,
        required_vars: I,
        env: E,
        prompter: Prompter<R, W>,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<RequiredVariable>,
    {
        Self {
            project_name: project_name.into(),
            required_vars: required_vars.into_iter().map(Into::into).collect(),
            env,
            prompter,
            platform: Platform::current(),
            loader: EnvFileLoader::new(),
        }
    }

    /// Replace the environment that is read for paths and populated from the file.
    pub fn with_environment<E2: Environment>(self, env: E2) -> Bootstrapper<E2, R, W> {
        Bootstrapper {
            project_name: self.project_name,
            required_vars: self.required_vars,
            env,
            prompter: self.prompter,
            platform: self.platform,
            loader: self.loader,
        }
    }

    /// Replace the input/output used for prompts and status messages.
    pub fn with_prompter<R2: BufRead, W2: Write>(
        self,
        prompter: Prompter<R2, W2>,
    ) -> Bootstrapper<E, R2, W2> {
        Bootstrapper {
            project_name: self.project_name,
            required_vars: self.required_vars,
            env: self.env,
            prompter,
            platform: self.platform,
            loader: self.loader,
        }
    }

    /// Override the directory convention (primarily for testing).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Let values from the file replace variables that are already set.
    pub fn override_existing(mut self, enabled: bool) -> Self {
        self.loader = self.loader.override_existing(enabled);
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn required_vars(&self) -> &[RequiredVariable] {
        &self.required_vars
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Consumes the bootstrapper, returning its environment and prompter.
    pub fn into_parts(self) -> (E, Prompter<R, W>) {
        (self.env, self.prompter)
    }

    /// Resolves the config directory, creating it if absent.
    pub fn config_dir(&self) -> Result<PathBuf, BootstrapError> {
        resolve_config_dir(&self.project_name, &self.env, self.platform)
    }

    /// Resolves the `.env` path, creating its directory if absent.
    pub fn env_file_path(&self) -> Result<PathBuf, BootstrapError> {
        self.config_dir().map(|dir| env_file_path(&dir))
    }

    /// Loads the `.env` file, creating it interactively if it does not exist.
    ///
    /// # Errors
    ///
    /// - `BootstrapError::Declined` if the user answers anything but `y`.
    /// - Filesystem, parse, and terminal errors from the individual steps.
    pub fn run(&mut self) -> Result<BootstrapOutcome, BootstrapError> {
        let config_dir = self.config_dir()?;
        tracing::debug!(
            project = %self.project_name,
            path = %config_dir.display(),
            "Resolved config directory"
        );

        let path = match self
            .loader
            .load(&config_dir, &mut self.env, &mut self.prompter)?
        {
            LoadOutcome::Loaded { path, keys } => {
                return Ok(BootstrapOutcome::Loaded { path, keys });
            }
            LoadOutcome::Missing { path } => path,
        };

        let answer = self
            .prompter
            .ask("Would you like to create one now? (y/n): ")?;
        if !answer.eq_ignore_ascii_case(CREATE_CONFIRMATION) {
            tracing::warn!(path = %path.display(), "User declined to create .env file");
            self.prompter.say(&format!(
                "❌ Running in offline mode. Use command `{}` to go to online mode with database",
                OFFLINE_CONNECT_COMMAND
            ))?;
            return Err(BootstrapError::Declined { path });
        }

        create_env_file(&config_dir, &self.required_vars, &mut self.prompter)?;

        match self
            .loader
            .load(&config_dir, &mut self.env, &mut self.prompter)?
        {
            LoadOutcome::Loaded { path, keys } => Ok(BootstrapOutcome::Created { path, keys }),
            LoadOutcome::Missing { path } => Err(BootstrapError::EnvFileVanished { path }),
        }
    }

    /// Like `run`, but exits the process with `DECLINED_EXIT_CODE` if the user
    /// declines. Other errors are returned to the caller.
    pub fn run_or_exit(mut self) -> Result<BootstrapOutcome, BootstrapError> {
        match self.run() {
            Err(e) if e.is_declined() => {
                let _ = self.prompter.flush();
                std::process::exit(DECLINED_EXIT_CODE);
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests;
