//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the `Bootstrapper` for commands that need a project.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup and process exit (see `main()`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - `completions` never requires a project name.

use anyhow::{Context, Result};
use envboot_config::Bootstrapper;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the process exit code on success.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    match cli.selected_command() {
        Commands::Load { list } => {
            commands::load::run(bootstrapper(&cli)?, *list)?;
        }
        Commands::Path => {
            commands::path::run(&bootstrapper(&cli)?)?;
        }
        Commands::Exec { program, args } => {
            return commands::exec::run(bootstrapper(&cli)?, program, args);
        }
        Commands::Completions { shell } => {
            commands::completions::run(*shell)?;
        }
    }
    Ok(ExitCode::Success.as_i32())
}

fn bootstrapper(cli: &Cli) -> Result<Bootstrapper> {
    let project = cli
        .project
        .as_deref()
        .context("A project name is required: pass --project or set ENVBOOT_PROJECT")?;

    Ok(Bootstrapper::new(project, cli.vars.iter().cloned())
        .override_existing(cli.override_existing))
}
