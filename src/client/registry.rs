use reqwest::Method;
use serde_json::Value;

use super::{CreatedId, PortainerClient};
use crate::models::{Registry, RegistryCreateRequest, RegistryPingRequest};

impl PortainerClient {
    pub async fn get_registries(&self) -> crate::Result<Vec<Registry>> {
        let url = self.endpoint(&["registries"], &[])?;
        self.get_list(url).await
    }

    pub async fn create_registry(&self, request: &RegistryCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["registries"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn delete_registry(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["registries", id.as_str()], &[])?;
        self.delete(url).await
    }

    /// Check that Portainer can reach and authenticate against a registry.
    pub async fn ping_registry(&self, request: &RegistryPingRequest) -> crate::Result<Value> {
        let url = self.endpoint(&["registries", "ping"], &[])?;
        self.send_json(Method::POST, url, request).await
    }
}
