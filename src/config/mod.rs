//! Configuration for kubectl-lookupingress
//!
//! Settings are layered: built-in defaults, then the YAML config file, then
//! environment variables. Command-line flags are applied on top by the CLI.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, TableConfig};
