use reqwest::Method;
use serde_json::{Map, Value};

use super::PortainerClient;

impl PortainerClient {
    /// Update an environment's name, public URL and group.
    ///
    /// Only non-empty values are sent: an empty string or a group ID of zero
    /// leaves that field unchanged.
    pub async fn update_environment(
        &self,
        id: i64,
        name: &str,
        public_url: &str,
        group_id: i64,
    ) -> crate::Result<()> {
        let mut payload = Map::new();
        if !name.is_empty() {
            payload.insert("name".to_string(), Value::from(name));
        }
        if !public_url.is_empty() {
            payload.insert("publicURL".to_string(), Value::from(public_url));
        }
        if group_id > 0 {
            payload.insert("groupID".to_string(), Value::from(group_id));
        }

        let id = id.to_string();
        let url = self.endpoint(&["endpoints", id.as_str()], &[])?;
        self.send_unit(Method::PUT, url, Some(&payload)).await
    }

    pub async fn get_agent_versions(&self) -> crate::Result<Vec<String>> {
        let url = self.endpoint(&["endpoints", "agent_versions"], &[])?;
        self.get_list(url).await
    }
}
