//! Config file location
//!
//! The directory is picked in this order:
//! 1. `KUBE_LOOKUP_INGRESS_CONFIG_DIR`, used as-is
//! 2. `$XDG_CONFIG_HOME/kube-lookup-ingress`
//! 3. `~/.config/kube-lookup-ingress` (`%APPDATA%\kube-lookup-ingress` on Windows)
//!
//! Empty environment variables count as unset.

use directories::BaseDirs;
use std::path::PathBuf;

const APP_NAME: &str = "kube-lookup-ingress";
const CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "KUBE_LOOKUP_INGRESS_CONFIG_DIR";

/// Directory holding `config.yaml`
pub fn config_dir() -> PathBuf {
    resolve_config_dir(
        non_empty_env(CONFIG_DIR_ENV),
        non_empty_env("XDG_CONFIG_HOME"),
        platform_config_home(),
    )
}

/// Full path of the config file
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Per-user config root when XDG_CONFIG_HOME is not set
fn platform_config_home() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    if cfg!(windows) {
        Some(dirs.config_dir().to_path_buf())
    } else {
        // ~/.config on macOS too, not ~/Library/Application Support
        Some(dirs.home_dir().join(".config"))
    }
}

fn resolve_config_dir(
    override_dir: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    platform_home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }

    xdg_config_home
        .or(platform_home)
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_NAME)
}
