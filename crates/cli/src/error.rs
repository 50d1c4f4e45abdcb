//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map BootstrapError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - `Declined` matches the library's `DECLINED_EXIT_CODE`.
//! - Exit code 2 is left to clap for usage errors.
//! - `exec` exits with the child's own status, which bypasses this enum.

use envboot_config::BootstrapError;
use envboot_config::constants::DECLINED_EXIT_CODE;

/// Structured exit codes for envboot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - filesystem, parse, or terminal failure.
    GeneralError = 1,

    /// The user declined to create the missing `.env` file.
    ///
    /// Scripts should treat the project as unconfigured ("offline mode").
    Declined = DECLINED_EXIT_CODE as u8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&BootstrapError> for ExitCode {
    fn from(err: &BootstrapError) -> Self {
        match err {
            BootstrapError::Declined { .. } => ExitCode::Declined,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no BootstrapError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<BootstrapError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
