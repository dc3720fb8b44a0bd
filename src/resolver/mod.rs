//! Ingress resolution
//!
//! Finds the Ingress paths that route to a Service, either named directly or
//! reached through a Deployment. Similar to reading `kubectl describe ingress`
//! for every Ingress in a namespace and joining the backends by hand.

mod core;
mod selector;

pub use self::core::{match_backends, resolve, resolve_deployment, resolve_service};
pub use self::selector::selector_matches;
