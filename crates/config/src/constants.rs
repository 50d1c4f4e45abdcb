//! Centralized constants for the envboot workspace.
//!
//! Path fallbacks live here rather than in the resolver so tests can reason
//! about them alongside an injected `Environment`.

// =============================================================================
// File Layout
// =============================================================================

/// Name of the environment file inside the project's config directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Prefix for the scratch file used while writing a new `.env`.
pub const ENV_FILE_TEMP_PREFIX: &str = ".env.partial";

// =============================================================================
// Platform Directory Resolution
// =============================================================================

/// Environment variable naming the roaming application data directory on Windows.
pub const APPDATA_VAR: &str = "APPDATA";

/// Used when `APPDATA` is unset or blank.
pub const WINDOWS_APPDATA_FALLBACK: &str = r"C:\Users\Default\AppData\Roaming";

/// Environment variable naming the XDG base config directory.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Used when `XDG_CONFIG_HOME` is unset or blank. Tilde-expanded.
pub const XDG_CONFIG_HOME_FALLBACK: &str = "~/.config";

// =============================================================================
// Interactive Flow
// =============================================================================

/// The only answer (trimmed, case-insensitive) that starts file creation.
pub const CREATE_CONFIRMATION: &str = "y";

/// Process exit status when the user declines to create the `.env` file.
pub const DECLINED_EXIT_CODE: i32 = 3;

/// Command suggested to users who decline, for going online later.
pub const OFFLINE_CONNECT_COMMAND: &str = "connect";
