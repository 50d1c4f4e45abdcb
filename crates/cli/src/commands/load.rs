//! Load command: bootstrap the project's environment.
//!
//! Invariants:
//! - Variable values are never printed, only names.

use anyhow::{Context, Result};
use envboot_config::Bootstrapper;

/// Bootstraps the environment and optionally lists the loaded variable names.
pub fn run(mut bootstrapper: Bootstrapper, list: bool) -> Result<()> {
    let outcome = bootstrapper
        .run()
        .with_context(|| format!("Failed to bootstrap project '{}'", bootstrapper.project_name()))?;

    if list {
        for key in outcome.keys() {
            println!("{}", key);
        }
    }
    Ok(())
}
