//! Lookup errors
//!
//! Fatal conditions of talking to the cluster. A Deployment that cannot be fetched
//! is not an error: the resolver skips it and reports no rows.

/// Fatal lookup errors
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Error loading kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Error creating Kubernetes client: {0}")]
    Client(String),

    #[error("Error listing ingresses in namespace '{namespace}': {reason}")]
    ListIngresses { namespace: String, reason: String },

    #[error("Error listing services in namespace '{namespace}': {reason}")]
    ListServices { namespace: String, reason: String },
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;
