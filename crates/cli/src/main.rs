//! envboot - Locate, create, and load a per-project `.env` file.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging before any command runs.
//! - Translate command results into structured exit codes.
//!
//! Does NOT handle:
//! - Path resolution or `.env` parsing (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries prompts and command output only.
//! - No async runtime or worker threads exist while the environment is mutated.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
