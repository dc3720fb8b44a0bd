//! kubectl-lookupingress - find the Ingresses routing to a Service or Deployment
//!
//! Reads the Ingresses of a namespace and joins their backends against a
//! Service name, or against the Services selecting a Deployment, then prints
//! the matching rules as a table.

use anyhow::Result;
use clap::Parser;
use kube_lookup_ingress::cli::{self, Args, USAGE};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    cli::init_logging(args.debug);

    let Some(query) = args.query() else {
        println!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    };

    cli::run_lookup(&args, &query).await?;

    Ok(ExitCode::SUCCESS)
}
