//! Kubernetes client module
//!
//! Resolves the kubeconfig the same way `kubectl` plugins are expected to
//! and builds a client from it:
//! 1. `--kubeconfig` flag
//! 2. `KUBECONFIG` environment variable (taken as a single path)
//! 3. `$HOME/.kube/config`
//!
//! Proxy settings from `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY` are honoured
//! by the underlying client.

pub mod fetch;

pub use fetch::{ClusterSource, KubeSource};

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::{Path, PathBuf};

use crate::error::{LookupError, LookupResult};

/// Resolve the kubeconfig path from the flag, environment and home directory
pub fn kubeconfig_path(explicit: Option<&Path>) -> LookupResult<PathBuf> {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(|| directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()));

    resolve_kubeconfig_path(explicit, std::env::var("KUBECONFIG").ok(), home)
}

/// Pure resolution step behind [`kubeconfig_path`]
fn resolve_kubeconfig_path(
    explicit: Option<&Path>,
    kubeconfig_env: Option<String>,
    home: Option<PathBuf>,
) -> LookupResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(env) = kubeconfig_env.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(env));
    }

    home.map(|h| h.join(".kube").join("config")).ok_or_else(|| {
        LookupError::Kubeconfig(
            "KUBECONFIG is not set and the home directory could not be determined".to_string(),
        )
    })
}

/// Build a Kubernetes client from a kubeconfig file
///
/// `context` overrides the kubeconfig's `current-context` when given.
pub async fn create_client(path: &Path, context: Option<&str>) -> LookupResult<Client> {
    tracing::debug!("Loading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path)
        .map_err(|e| LookupError::Kubeconfig(format!("{}: {}", path.display(), e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(|e| LookupError::Kubeconfig(format!("{}: {}", path.display(), e)))?;

    tracing::debug!("Using cluster at {}", config.cluster_url);

    Client::try_from(config).map_err(|e| LookupError::Client(e.to_string()))
}
