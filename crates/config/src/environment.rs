//! Environment capability used by the bootstrapper.
//!
//! Responsibilities:
//! - Abstract reads and writes of environment variables behind `Environment`.
//! - Provide the real process environment (`ProcessEnv`) and an in-memory
//!   map (`MapEnv`) for tests and isolated embedders.
//! - Select the path convention (`Platform`) independently of the host OS.
//!
//! Does NOT handle:
//! - Parsing `.env` files (see `loader.rs`).
//! - Path construction (see `paths.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset by `env_var_or_none`.
//! - `ProcessEnv::set_var` is only sound while no other thread reads the environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Source and sink for environment variables.
pub trait Environment {
    /// Returns the raw value of `key`, or `None` if unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set_var(&mut self, key: &str, value: &str);

    /// Returns the current user's home directory, used for `~` expansion.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        // SAFETY: the bootstrapper runs once at startup, before worker threads exist.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
    home: Option<PathBuf>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory returned by `home_dir`.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Adds a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&mut self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none<E: Environment + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Directory convention used to locate the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `%APPDATA%\<project>`
    Windows,
    /// `$XDG_CONFIG_HOME/<project>`, defaulting to `~/.config/<project>`.
    Unix,
}

impl Platform {
    /// The convention of the host this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
