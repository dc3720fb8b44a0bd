//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::QueryKind;
use crate::table::{OutputFormat, TableStyle};

/// Printed to stdout when the kind or name is missing
pub const USAGE: &str = "Usage: kubectl lookupingress [-n namespace] <deployment|service> <name>";

/// Find the Ingresses that route traffic to a Service or Deployment
#[derive(Parser, Debug)]
#[command(name = "kubectl-lookupingress", version)]
#[command(about = "Find the Ingresses that route traffic to a Service or Deployment", long_about = None)]
#[command(override_usage = "kubectl lookupingress [-n namespace] <deployment|service> <name>")]
pub struct Args {
    /// Namespace of the resource
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Path to the kubeconfig file (defaults to $KUBECONFIG, then ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current context
    #[arg(long)]
    pub context: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Table column layout
    #[arg(long, value_enum)]
    pub style: Option<TableStyle>,

    /// Enable debug logging (to stderr)
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Kind of resource: service or deployment
    pub kind: Option<String>,

    /// Name of the resource
    pub name: Option<String>,

    /// Extra positional arguments are ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

/// A parsed lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: QueryKind,
    pub name: String,
}

/// Effective settings after layering flags over configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub namespace: String,
    pub output: OutputFormat,
    pub style: TableStyle,
}

impl Args {
    /// The lookup request, or `None` when fewer than two positionals were given
    pub fn query(&self) -> Option<Query> {
        match (&self.kind, &self.name) {
            (Some(kind), Some(name)) => Some(Query {
                kind: QueryKind::parse(kind),
                name: name.clone(),
            }),
            _ => None,
        }
    }

    /// Layer command-line flags over the loaded configuration
    pub fn settings(&self, config: &Config) -> Settings {
        Settings {
            namespace: self
                .namespace
                .clone()
                .unwrap_or_else(|| config.default_namespace.clone()),
            output: self.output.unwrap_or(config.output),
            style: self.style.unwrap_or(config.table.style),
        }
    }
}
