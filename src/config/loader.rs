//! Configuration loading and merging logic
//!
//! Handles loading configuration from its sources and applying them
//! according to precedence rules.

use super::{defaults, paths, schema::Config};
use crate::table::{OutputFormat, TableStyle};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

/// Environment variable overriding `defaultNamespace`
pub const NAMESPACE_ENV: &str = "KUBE_LOOKUP_INGRESS_NAMESPACE";
/// Environment variable overriding `output`
pub const OUTPUT_ENV: &str = "KUBE_LOOKUP_INGRESS_OUTPUT";
/// Environment variable overriding `table.style`
pub const TABLE_STYLE_ENV: &str = "KUBE_LOOKUP_INGRESS_TABLE_STYLE";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let config = Self::load_from(&paths::config_path())?;
        Ok(Self::apply_env_overrides(config, |key| std::env::var(key).ok()))
    }

    /// Load configuration from a file, falling back to defaults if it is absent
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::load_defaults());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    ///
    /// `lookup` resolves a variable name to its value. Unparseable values are
    /// ignored with a warning.
    pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(namespace) = lookup(NAMESPACE_ENV).filter(|ns| !ns.is_empty()) {
            config.default_namespace = namespace;
        }

        if let Some(output) = lookup(OUTPUT_ENV) {
            match OutputFormat::from_str(&output, true) {
                Ok(format) => config.output = format,
                Err(_) => tracing::warn!("Ignoring {}={}: unknown output format", OUTPUT_ENV, output),
            }
        }

        if let Some(style) = lookup(TABLE_STYLE_ENV) {
            match TableStyle::from_str(&style, true) {
                Ok(style) => config.table.style = style,
                Err(_) => {
                    tracing::warn!("Ignoring {}={}: unknown table style", TABLE_STYLE_ENV, style)
                }
            }
        }

        config
    }
}
