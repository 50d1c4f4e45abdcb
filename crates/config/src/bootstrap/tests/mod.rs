//! Tests for the bootstrapper state machine.
//!
//! Responsibilities:
//! - Drive the load / create / decline paths with scripted input.
//! - Verify the written file and the populated environment.
//!
//! Invariants:
//! - Tests never write to the real process environment; they use `MapEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Cursor;
use std::path::Path;

use crate::constants::XDG_CONFIG_HOME_VAR;
use crate::environment::{MapEnv, Platform};
use crate::prompt::Prompter;
use crate::types::RequiredVariable;

use super::Bootstrapper;


pub(super) type ScriptedBootstrapper = Bootstrapper<MapEnv, Cursor<Vec<u8>>, Vec<u8>>;

/// The required variables used throughout these tests.
pub(super) fn api_vars() -> Vec<RequiredVariable> {
    vec![
        RequiredVariable::new("API_KEY", "none"),
        RequiredVariable::new("TIMEOUT", "30"),
    ]
}

/// Builds a Unix-convention bootstrapper rooted at `config_home` that reads `input`.
pub(super) fn scripted(config_home: &Path, input: &str) -> ScriptedBootstrapper {
    let env = MapEnv::new().with_var(XDG_CONFIG_HOME_VAR, config_home.to_string_lossy());
    Bootstrapper::from_parts(
        "myapp",
        api_vars(),
        env,
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
    )
    .with_platform(Platform::Unix)
}

/// Consumes the bootstrapper, returning its environment and everything it printed.
pub(super) fn finish(bootstrapper: ScriptedBootstrapper) -> (MapEnv, String) {
    let (env, prompter) = bootstrapper.into_parts();
    let (_, output) = prompter.into_inner();
    (env, String::from_utf8(output).unwrap())
}
