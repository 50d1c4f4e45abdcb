//! Command implementations.

pub mod completions;
pub mod exec;
pub mod load;
pub mod path;
