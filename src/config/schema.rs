//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use serde::{Deserialize, Serialize};

use crate::table::{OutputFormat, TableStyle};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Namespace used when `-n` is not given
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Table rendering configuration
    #[serde(default)]
    pub table: TableConfig,
}

/// Table rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableConfig {
    /// Column width policy
    #[serde(default)]
    pub style: TableStyle,
}

fn default_namespace() -> String {
    super::defaults::DEFAULT_NAMESPACE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            output: OutputFormat::default(),
            table: TableConfig::default(),
        }
    }
}
