//! Shared test utilities for envboot integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted at a temporary config home.
//!
//! Invariants / Assumptions:
//! - Both `XDG_CONFIG_HOME` and `APPDATA` point at the same directory, so the
//!   tests behave identically on every platform.
//! - Host values of `ENVBOOT_PROJECT` and `RUST_LOG` never leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `envboot` command whose config home is `config_home`.
pub fn envboot_cmd(config_home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envboot");

    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("APPDATA", config_home)
        .env_remove("ENVBOOT_PROJECT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns the `.env` path for `project` under `config_home`.
#[allow(dead_code)]
pub fn env_path(config_home: &Path, project: &str) -> PathBuf {
    config_home.join(project).join(".env")
}
