//! Config file loading tests

use kube_lookup_ingress::config::paths::{CONFIG_DIR_ENV, config_path};
use kube_lookup_ingress::config::{Config, ConfigLoader};
use kube_lookup_ingress::table::{OutputFormat, TableStyle};
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::load_from(&dir.path().join("config.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = ConfigLoader::load_from(file.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "defaultNamespace: payments").unwrap();

    let config = ConfigLoader::load_from(file.path()).unwrap();
    assert_eq!(config.default_namespace, "payments");
    assert_eq!(config.output, OutputFormat::Table);
    assert_eq!(config.table.style, TableStyle::Dynamic);
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "defaultNamespace: shop\noutput: yaml\ntable:\n  style: fixed\n"
    )
    .unwrap();

    let config = ConfigLoader::load_from(file.path()).unwrap();
    assert_eq!(config.default_namespace, "shop");
    assert_eq!(config.output, OutputFormat::Yaml);
    assert_eq!(config.table.style, TableStyle::Fixed);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "table: [not, a, map").unwrap();

    let err = ConfigLoader::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_unknown_style_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "table:\n  style: wide").unwrap();

    assert!(ConfigLoader::load_from(file.path()).is_err());
}

#[test]
fn test_config_dir_env_selects_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.yaml"),
        "defaultNamespace: from-env-dir\n",
    )
    .unwrap();

    // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
    // No other test in this binary reads the environment.
    unsafe {
        std::env::set_var(CONFIG_DIR_ENV, dir.path());
    }

    let path = config_path();
    let config = ConfigLoader::load().unwrap();

    // SAFETY: same as set_var above.
    unsafe {
        std::env::remove_var(CONFIG_DIR_ENV);
    }

    assert_eq!(path, dir.path().join("config.yaml"));
    assert_eq!(config.default_namespace, "from-env-dir");
}
