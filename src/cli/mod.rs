//! CLI command handling module
//!
//! Handles argument parsing, logging setup and the lookup command.

mod args;
mod commands;
mod logging;

pub use args::{Args, Query, Settings, USAGE};
pub use commands::run_lookup;
pub use logging::*;
