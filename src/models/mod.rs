//! Model layer
//!
//! Read-only projections of the cluster objects the lookup joins over,
//! plus the query kind and the result rows.
//!
//! Structure:
//! - `query_kind.rs` - The kind of resource being looked up
//! - `records.rs` - Ingress/Service/Deployment projections and `MatchResult`

pub mod query_kind;
pub mod records;

pub use query_kind::QueryKind;
pub use records::{
    DeploymentRecord, IngressPathRecord, IngressRecord, IngressRuleRecord, MatchResult,
    ServiceRecord,
};
