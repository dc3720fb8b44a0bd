//! Query kind definitions
//!
//! The first positional argument of the CLI names the kind of resource whose
//! Ingresses are being looked up. Only Services and Deployments are resolved;
//! anything else is carried through so the lookup can return no rows without
//! failing.

use std::fmt;

/// Kind of resource a lookup targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Match Ingress backends against a Service name directly
    Service,
    /// Match Ingress backends against every Service selecting the Deployment
    Deployment,
    /// Unsupported kind, kept lowercased as given
    Other(String),
}

impl QueryKind {
    /// Parse a kind argument (case-insensitive)
    ///
    /// Never fails: unknown values become [`QueryKind::Other`].
    pub fn parse(s: &str) -> Self {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "service" => QueryKind::Service,
            "deployment" => QueryKind::Deployment,
            _ => QueryKind::Other(lower),
        }
    }

    /// Get the display name as a string
    pub fn as_str(&self) -> &str {
        match self {
            QueryKind::Service => "service",
            QueryKind::Deployment => "deployment",
            QueryKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
