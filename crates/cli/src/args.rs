//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `--var NAME=DEFAULT` into `RequiredVariable`s.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use envboot_config::RequiredVariable;

#[derive(Parser)]
#[command(name = "envboot")]
#[command(about = "Locate, create, and load a per-project .env file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envboot -p myapp --var API_KEY=none --var TIMEOUT=30\n  envboot -p myapp load --list\n  envboot -p myapp path\n  envboot -p myapp exec -- ./server --port 8080\n"
)]
pub struct Cli {
    /// Project name; selects the config directory
    #[arg(short, long, global = true, env = "ENVBOOT_PROJECT")]
    pub project: Option<String>,

    /// Required variable prompted for when creating the file (NAME or NAME=DEFAULT, repeatable)
    #[arg(long = "var", value_name = "NAME[=DEFAULT]", global = true)]
    pub vars: Vec<RequiredVariable>,

    /// Let values from the .env file replace variables that are already set
    #[arg(long = "override", global = true)]
    pub override_existing: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the project's .env file, creating it interactively if missing (default)
    Load {
        /// Print the names of the loaded variables, one per line
        #[arg(long)]
        list: bool,
    },

    /// Print the path of the project's .env file
    Path,

    /// Load the project's .env file, then run a program with the populated environment
    Exec {
        /// Program to run
        program: String,

        /// Arguments passed to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

static DEFAULT_COMMAND: Commands = Commands::Load { list: false };

impl Cli {
    /// The selected subcommand, defaulting to `load`.
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&DEFAULT_COMMAND)
    }
}
