//! Resource projections
//!
//! Plain records holding only the fields the lookup needs. They are built once
//! from the API objects at the start of a run and never change afterwards.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::{HTTPIngressPath, Ingress, IngressRule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An Ingress and its routing rules, in API order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngressRecord {
    pub name: String,
    pub rules: Vec<IngressRuleRecord>,
}

/// One host rule of an Ingress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngressRuleRecord {
    /// Empty when the rule matches every host
    pub host: String,
    pub paths: Vec<IngressPathRecord>,
}

/// One HTTP path of a rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngressPathRecord {
    pub path: String,
    /// Name of the backend Service; `None` for resource backends
    pub backend_service: Option<String>,
}

/// A Service and its pod selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceRecord {
    pub name: String,
    /// Empty when the Service has no selector
    pub selector: BTreeMap<String, String>,
}

/// A Deployment and the match-labels of its selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeploymentRecord {
    pub name: String,
    pub match_labels: BTreeMap<String, String>,
}

/// One Ingress path whose backend resolves to the queried resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub ingress_name: String,
    pub host: String,
    pub path: String,
    pub service_name: String,
}

impl IngressRecord {
    /// Build a record from already-projected rules
    pub fn new(name: impl Into<String>, rules: Vec<IngressRuleRecord>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

impl IngressRuleRecord {
    pub fn new(host: impl Into<String>, paths: Vec<IngressPathRecord>) -> Self {
        Self {
            host: host.into(),
            paths,
        }
    }
}

impl IngressPathRecord {
    /// A path routed to the named Service
    pub fn service(path: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            backend_service: Some(service.into()),
        }
    }

    /// A path routed to a non-Service backend
    pub fn resource(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            backend_service: None,
        }
    }
}

impl ServiceRecord {
    pub fn new<K, V>(name: impl Into<String>, selector: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            selector: selector
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl DeploymentRecord {
    pub fn new<K, V>(name: impl Into<String>, labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            match_labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&HTTPIngressPath> for IngressPathRecord {
    fn from(path: &HTTPIngressPath) -> Self {
        Self {
            path: path.path.clone().unwrap_or_default(),
            backend_service: path.backend.service.as_ref().map(|svc| svc.name.clone()),
        }
    }
}

impl From<&IngressRule> for IngressRuleRecord {
    fn from(rule: &IngressRule) -> Self {
        // A rule without an http section routes nothing we can report
        let paths = rule
            .http
            .as_ref()
            .map(|http| http.paths.iter().map(IngressPathRecord::from).collect())
            .unwrap_or_default();

        Self {
            host: rule.host.clone().unwrap_or_default(),
            paths,
        }
    }
}

impl From<&Ingress> for IngressRecord {
    fn from(ingress: &Ingress) -> Self {
        let rules = ingress
            .spec
            .as_ref()
            .and_then(|spec| spec.rules.as_ref())
            .map(|rules| rules.iter().map(IngressRuleRecord::from).collect())
            .unwrap_or_default();

        Self {
            name: ingress.metadata.name.clone().unwrap_or_default(),
            rules,
        }
    }
}

impl From<&Service> for ServiceRecord {
    fn from(service: &Service) -> Self {
        Self {
            name: service.metadata.name.clone().unwrap_or_default(),
            selector: service
                .spec
                .as_ref()
                .and_then(|spec| spec.selector.clone())
                .unwrap_or_default(),
        }
    }
}

impl From<&Deployment> for DeploymentRecord {
    fn from(deployment: &Deployment) -> Self {
        Self {
            name: deployment.metadata.name.clone().unwrap_or_default(),
            match_labels: deployment
                .spec
                .as_ref()
                .and_then(|spec| spec.selector.match_labels.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingress_from_json(value: serde_json::Value) -> Ingress {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ingress_projection_keeps_order() {
        let ingress = ingress_from_json(serde_json::json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": { "name": "web-ing", "namespace": "default" },
            "spec": {
                "rules": [
                    {
                        "host": "a.example.com",
                        "http": {
                            "paths": [
                                {
                                    "path": "/",
                                    "pathType": "Prefix",
                                    "backend": { "service": { "name": "web-svc", "port": { "number": 80 } } }
                                },
                                {
                                    "path": "/static",
                                    "pathType": "Prefix",
                                    "backend": { "resource": { "apiGroup": "k8s.example.com", "kind": "StorageBucket", "name": "assets" } }
                                }
                            ]
                        }
                    },
                    { "host": "b.example.com" }
                ]
            }
        }));

        let record = IngressRecord::from(&ingress);
        assert_eq!(record.name, "web-ing");
        assert_eq!(record.rules.len(), 2);
        assert_eq!(
            record.rules[0].paths,
            vec![
                IngressPathRecord::service("/", "web-svc"),
                IngressPathRecord::resource("/static"),
            ]
        );
        assert_eq!(record.rules[1].host, "b.example.com");
        assert!(record.rules[1].paths.is_empty());
    }

    #[test]
    fn test_ingress_projection_missing_host_and_path() {
        let ingress = ingress_from_json(serde_json::json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": { "name": "catch-all" },
            "spec": {
                "rules": [
                    {
                        "http": {
                            "paths": [
                                {
                                    "pathType": "ImplementationSpecific",
                                    "backend": { "service": { "name": "web-svc", "port": { "name": "http" } } }
                                }
                            ]
                        }
                    }
                ]
            }
        }));

        let record = IngressRecord::from(&ingress);
        assert_eq!(record.rules[0].host, "");
        assert_eq!(record.rules[0].paths[0].path, "");
        assert_eq!(
            record.rules[0].paths[0].backend_service.as_deref(),
            Some("web-svc")
        );
    }

    #[test]
    fn test_ingress_without_spec_has_no_rules() {
        let ingress = ingress_from_json(serde_json::json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": { "name": "empty" }
        }));
        assert!(IngressRecord::from(&ingress).rules.is_empty());
    }

    #[test]
    fn test_service_projection() {
        let service: Service = serde_json::from_value(serde_json::json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": { "name": "api-svc" },
            "spec": { "selector": { "app": "api", "tier": "backend" } }
        }))
        .unwrap();
        let record = ServiceRecord::from(&service);
        assert_eq!(
            record,
            ServiceRecord::new("api-svc", [("app", "api"), ("tier", "backend")])
        );

        let external: Service = serde_json::from_value(serde_json::json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": { "name": "external" },
            "spec": { "type": "ExternalName", "externalName": "db.example.com" }
        }))
        .unwrap();
        assert!(ServiceRecord::from(&external).selector.is_empty());
    }

    #[test]
    fn test_deployment_projection_uses_selector_match_labels() {
        let deployment: Deployment = serde_json::from_value(serde_json::json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "api" },
            "spec": {
                "selector": { "matchLabels": { "app": "api" } },
                "template": {
                    "metadata": { "labels": { "app": "api", "version": "v2" } },
                    "spec": { "containers": [ { "name": "api", "image": "api:2" } ] }
                }
            }
        }))
        .unwrap();
        assert_eq!(
            DeploymentRecord::from(&deployment),
            DeploymentRecord::new("api", [("app", "api")])
        );
    }

    #[test]
    fn test_match_result_serializes_camel_case() {
        let row = MatchResult {
            ingress_name: "web-ing".to_string(),
            host: "a.example.com".to_string(),
            path: "/".to_string(),
            service_name: "web-svc".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["ingressName"], "web-ing");
        assert_eq!(json["serviceName"], "web-svc");
    }
}
