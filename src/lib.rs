//! kube-lookup-ingress library
//!
//! This library provides the core functionality for the
//! `kubectl-lookupingress` plugin. It can be used both as a binary and as a
//! library for testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod kube;
pub mod models;
pub mod resolver;
pub mod table;

// Re-export commonly used types for convenience
pub use error::{LookupError, LookupResult};
pub use models::{MatchResult, QueryKind};
