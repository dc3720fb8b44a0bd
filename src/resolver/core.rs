//! Core resolution implementation

use crate::error::{LookupError, LookupResult};
use crate::kube::ClusterSource;
use crate::models::{DeploymentRecord, IngressRecord, MatchResult, QueryKind, ServiceRecord};
use crate::resolver::selector_matches;

/// Collect every Ingress path whose backend is the named Service
///
/// Rows come out in Ingress, rule, path order. Paths with a non-Service
/// backend are skipped. Repeated backends produce repeated rows.
pub fn match_backends(ingresses: &[IngressRecord], service_name: &str) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for ingress in ingresses {
        for rule in &ingress.rules {
            for path in &rule.paths {
                let Some(backend) = path.backend_service.as_deref() else {
                    continue;
                };

                if backend == service_name {
                    results.push(MatchResult {
                        ingress_name: ingress.name.clone(),
                        host: rule.host.clone(),
                        path: path.path.clone(),
                        service_name: backend.to_string(),
                    });
                }
            }
        }
    }

    results
}

/// Resolve a Service lookup
///
/// The name is compared literally against backend references; the Service
/// object itself is never read.
pub fn resolve_service(ingresses: &[IngressRecord], name: &str) -> Vec<MatchResult> {
    match_backends(ingresses, name)
}

/// Resolve a Deployment lookup
///
/// Walks the Services in list order and, for each one whose selector selects
/// the Deployment's match-labels, appends the Ingress paths backed by that
/// Service. The Deployment name is never compared against backends.
pub fn resolve_deployment(
    ingresses: &[IngressRecord],
    services: &[ServiceRecord],
    deployment: &DeploymentRecord,
) -> Vec<MatchResult> {
    services
        .iter()
        .filter(|svc| selector_matches(&svc.selector, &deployment.match_labels))
        .inspect(|svc| {
            tracing::debug!(
                "Service {} selects deployment {}",
                svc.name,
                deployment.name
            )
        })
        .flat_map(|svc| match_backends(ingresses, &svc.name))
        .collect()
}

/// Run a lookup against a cluster source
///
/// Listing Ingresses or Services fails the lookup. A Deployment that cannot
/// be fetched yields no rows instead. The Deployment is fetched at most once,
/// and only when some Service has a selector to compare it against.
pub async fn resolve<S>(
    source: &S,
    namespace: &str,
    kind: &QueryKind,
    name: &str,
) -> LookupResult<Vec<MatchResult>>
where
    S: ClusterSource + ?Sized,
{
    let ingresses = source
        .list_ingresses(namespace)
        .await
        .map_err(|e| LookupError::ListIngresses {
            namespace: namespace.to_string(),
            reason: format!("{:#}", e),
        })?;

    match kind {
        QueryKind::Service => Ok(resolve_service(&ingresses, name)),
        QueryKind::Deployment => {
            let services = source.list_services(namespace).await.map_err(|e| {
                LookupError::ListServices {
                    namespace: namespace.to_string(),
                    reason: format!("{:#}", e),
                }
            })?;

            if services.iter().all(|svc| svc.selector.is_empty()) {
                tracing::debug!("No service in {} has a selector", namespace);
                return Ok(Vec::new());
            }

            match source.get_deployment(namespace, name).await {
                Ok(deployment) => Ok(resolve_deployment(&ingresses, &services, &deployment)),
                Err(e) => {
                    tracing::debug!("Skipping deployment {}/{}: {:#}", namespace, name, e);
                    Ok(Vec::new())
                }
            }
        }
        QueryKind::Other(other) => {
            tracing::debug!("Unsupported kind '{}', nothing to resolve", other);
            Ok(Vec::new())
        }
    }
}
