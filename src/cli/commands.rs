//! CLI command handlers

use anyhow::{Context, Result};

use super::args::{Args, Query};
use crate::config::ConfigLoader;
use crate::kube::{self as cluster, KubeSource};
use crate::resolver;
use crate::table;

/// Run a lookup and print its rows
///
/// Zero rows is a successful lookup. Kubeconfig, client and listing failures
/// are returned as errors.
pub async fn run_lookup(args: &Args, query: &Query) -> Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;
    let settings = args.settings(&config);

    tracing::info!(
        "Looking up ingresses for {} {} in namespace {}",
        query.kind,
        query.name,
        settings.namespace
    );

    let kubeconfig = cluster::kubeconfig_path(args.kubeconfig.as_deref())?;
    let client = cluster::create_client(&kubeconfig, args.context.as_deref()).await?;
    let source = KubeSource::new(client);

    let rows = resolver::resolve(&source, &settings.namespace, &query.kind, &query.name).await?;
    tracing::debug!("Lookup produced {} rows", rows.len());

    table::print_results(&rows, settings.output, settings.style)
}
