//! Exec command: run a program with the bootstrapped environment.
//!
//! Responsibilities:
//! - Bootstrap the environment, then spawn the program and wait for it.
//!
//! Invariants:
//! - The child inherits the populated process environment.
//! - The returned code is the child's; signal deaths map to `GeneralError`.

use anyhow::{Context, Result};
use envboot_config::Bootstrapper;
use std::process::Command;

use crate::error::ExitCode;

/// Bootstraps the environment and runs `program` with `args`, returning its exit code.
pub fn run(mut bootstrapper: Bootstrapper, program: &str, args: &[String]) -> Result<i32> {
    bootstrapper
        .run()
        .with_context(|| format!("Failed to bootstrap project '{}'", bootstrapper.project_name()))?;
    // Release the stdin lock before the child starts reading.
    drop(bootstrapper);

    tracing::debug!(program, ?args, "Spawning child process");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run '{}'", program))?;

    Ok(status.code().unwrap_or(ExitCode::GeneralError.as_i32()))
}
