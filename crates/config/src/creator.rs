//! Interactive creation of a project's `.env` file.
//!
//! Responsibilities:
//! - Prompt for each required variable in caller order, falling back to defaults.
//! - Write `NAME=VALUE` lines to a scratch file and atomically persist it as `.env`.
//! - Quote values so that dotenvy reads back exactly what was entered.
//!
//! Does NOT handle:
//! - Asking whether to create the file at all (see `bootstrap`).
//! - Loading the file afterwards (see `loader.rs`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename); an interrupted run leaves no `.env`.
//! - An existing `.env` is never overwritten.
//! - On Unix the file is created with owner-only permissions.
//! - Plain values are written bare; values with whitespace, quotes, `#`, `$`
//!   or `\` are double-quoted with `\`, `"` and `$` escaped.

use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::constants::ENV_FILE_TEMP_PREFIX;
use crate::error::BootstrapError;
use crate::paths::env_file_path;
use crate::prompt::Prompter;
use crate::types::RequiredVariable;

/// Prompts for `vars` and writes them to `<config_dir>/.env`.
///
/// Returns the path of the new file and the `(name, value)` pairs written,
/// in prompt order.
pub fn create_env_file<R, W>(
    config_dir: &Path,
    vars: &[RequiredVariable],
    prompter: &mut Prompter<R, W>,
) -> Result<(PathBuf, Vec<(String, String)>), BootstrapError>
where
    R: BufRead,
    W: Write,
{
    let path = env_file_path(config_dir);
    let create_err = |source| BootstrapError::EnvFileCreate {
        path: path.clone(),
        source,
    };
    let write_err = |source| BootstrapError::EnvFileWrite {
        path: path.clone(),
        source,
    };

    let mut scratch = tempfile::Builder::new()
        .prefix(ENV_FILE_TEMP_PREFIX)
        .tempfile_in(config_dir)
        .map_err(create_err)?;

    let mut written = Vec::with_capacity(vars.len());
    for var in vars {
        let answer = prompter.ask(&format!(
            "Please set the value for {} (default: {}): ",
            var.name, var.default_value
        ))?;
        let value = if answer.is_empty() {
            var.default_value.clone()
        } else {
            answer
        };

        writeln!(scratch, "{}={}", var.name, quote_value(&value)).map_err(write_err)?;
        prompter.say(&format!("✅ {} set.", var.name))?;
        written.push((var.name.clone(), value));
    }
    prompter.say("All variables have been set.")?;

    scratch.as_file().sync_all().map_err(write_err)?;
    scratch
        .persist_noclobber(&path)
        .map_err(|e| create_err(e.error))?;

    tracing::info!(path = %path.display(), vars = written.len(), "Created .env file");
    prompter.say(&format!(".env file created at {}", config_dir.display()))?;
    prompter.say("Edit this file with your configuration.")?;

    Ok((path, written))
}

/// Renders `value` as a dotenv value that parses back to `value` verbatim.
fn quote_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '#' | '$' | '\\'));
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        // Escaped `$` is never substituted.
        if matches!(c, '\\' | '"' | '$') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
