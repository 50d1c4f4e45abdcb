//! Path command: print where the project's `.env` file lives.

use anyhow::{Context, Result};
use envboot_config::Bootstrapper;

/// Prints the `.env` path, creating the config directory if absent.
pub fn run(bootstrapper: &Bootstrapper) -> Result<()> {
    let path = bootstrapper
        .env_file_path()
        .context("Failed to resolve config directory")?;
    println!("{}", path.display());
    Ok(())
}
