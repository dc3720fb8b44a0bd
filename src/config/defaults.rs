//! Default configuration values

use super::schema::Config;

/// Namespace queried when neither `-n` nor any config layer names one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}
