//! Resource fetching
//!
//! The lookup reads three kinds of objects. [`ClusterSource`] is the seam
//! between the resolver and the API server so the join can run against
//! in-memory fixtures in tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use kube::Api;
use kube::api::ListParams;

use crate::models::{DeploymentRecord, IngressRecord, ServiceRecord};

/// Read-only access to the objects of one namespace
#[async_trait]
pub trait ClusterSource: Send + Sync {
    /// List every Ingress in the namespace, in API order
    async fn list_ingresses(&self, namespace: &str) -> Result<Vec<IngressRecord>>;

    /// List every Service in the namespace, in API order
    async fn list_services(&self, namespace: &str) -> Result<Vec<ServiceRecord>>;

    /// Fetch a single Deployment by name
    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<DeploymentRecord>;
}

/// [`ClusterSource`] backed by the Kubernetes API
pub struct KubeSource {
    client: kube::Client,
}

impl KubeSource {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterSource for KubeSource {
    async fn list_ingresses(&self, namespace: &str) -> Result<Vec<IngressRecord>> {
        let api: Api<Ingress> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default())
            .await
            .with_context(|| format!("Failed to list ingresses in {}", namespace))?;

        tracing::debug!("Listed {} ingresses in {}", list.items.len(), namespace);
        Ok(list.items.iter().map(IngressRecord::from).collect())
    }

    async fn list_services(&self, namespace: &str) -> Result<Vec<ServiceRecord>> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default())
            .await
            .with_context(|| format!("Failed to list services in {}", namespace))?;

        tracing::debug!("Listed {} services in {}", list.items.len(), namespace);
        Ok(list.items.iter().map(ServiceRecord::from).collect())
    }

    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<DeploymentRecord> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let deployment = api
            .get(name)
            .await
            .with_context(|| format!("Failed to fetch deployment {}/{}", namespace, name))?;

        Ok(DeploymentRecord::from(&deployment))
    }
}
