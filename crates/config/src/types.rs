//! Caller-facing types for the bootstrapper.
//!
//! Responsibilities:
//! - Define `RequiredVariable`, the (name, default) pairs prompted for on creation.
//! - Parse `NAME=DEFAULT` text for command-line use.
//!
//! Invariants:
//! - The first `=` splits name from default; the default may contain `=`.
//! - Names are trimmed and never empty when parsed from text.

use std::fmt;
use std::str::FromStr;

use crate::error::BootstrapError;

/// A variable the `.env` file must define, with the value used when the user
/// leaves the prompt blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredVariable {
    pub name: String,
    pub default_value: String,
}

impl RequiredVariable {
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
        }
    }
}

impl<N: Into<String>, D: Into<String>> From<(N, D)> for RequiredVariable {
    fn from((name, default_value): (N, D)) -> Self {
        Self::new(name, default_value)
    }
}

impl FromStr for RequiredVariable {
    type Err = BootstrapError;

    /// Parses `NAME=DEFAULT`, `NAME=` or `NAME`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, default_value) = s.split_once('=').unwrap_or((s, ""));
        let name = name.trim();

        if name.is_empty() {
            return Err(BootstrapError::InvalidVariable {
                spec: s.to_string(),
                message: "name must not be empty".to_string(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(BootstrapError::InvalidVariable {
                spec: s.to_string(),
                message: "name must not contain whitespace".to_string(),
            });
        }

        Ok(Self::new(name, default_value))
    }
}

impl fmt::Display for RequiredVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.default_value)
    }
}
