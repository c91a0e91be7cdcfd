use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::{CreatedId, PortainerClient};
use crate::models::{Policy, PolicyConflictsRequest, PolicyCreateRequest, PolicyUpdateRequest};

#[derive(Debug, Deserialize)]
struct PolicyList {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    policies: Vec<Policy>,
}

impl PortainerClient {
    pub async fn get_policies(&self) -> crate::Result<Vec<Policy>> {
        let url = self.endpoint(&["policies"], &[])?;
        let list: PolicyList = self.get_json(url).await?;
        Ok(list.policies)
    }

    pub async fn get_policy(&self, id: i64) -> crate::Result<Policy> {
        let id = id.to_string();
        let url = self.endpoint(&["policies", id.as_str()], &[])?;
        self.get_json(url).await
    }

    /// Returns the ID of the created policy.
    pub async fn create_policy(&self, request: &PolicyCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["policies"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn update_policy(&self, id: i64, request: &PolicyUpdateRequest) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["policies", id.as_str()], &[])?;
        self.send_unit(Method::PUT, url, Some(request)).await
    }

    pub async fn delete_policy(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["policies", id.as_str()], &[])?;
        self.delete(url).await
    }

    /// Built-in policy templates, optionally filtered. Template payloads
    /// vary per policy type and are kept as raw JSON.
    pub async fn get_policy_templates(&self, category: &str, policy_type: &str) -> crate::Result<Value> {
        let url = self.endpoint(
            &["policies", "templates"],
            &[("category", category), ("type", policy_type)],
        )?;
        self.get_json(url).await
    }

    pub async fn get_policy_template(&self, id: &str) -> crate::Result<Value> {
        let url = self.endpoint(&["policies", "templates", id], &[])?;
        self.get_json(url).await
    }

    pub async fn get_policy_metadata(&self) -> crate::Result<Value> {
        let url = self.endpoint(&["policies", "metadata"], &[])?;
        self.get_json(url).await
    }

    /// Policies that would conflict with `request` if it were created.
    pub async fn get_policy_conflicts(&self, request: &PolicyConflictsRequest) -> crate::Result<Value> {
        let url = self.endpoint(&["policies", "conflicts"], &[])?;
        self.send_json(Method::POST, url, request).await
    }
}
