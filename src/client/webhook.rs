use reqwest::Method;

use super::{CreatedId, PortainerClient};
use crate::models::{Webhook, WebhookCreateRequest};

impl PortainerClient {
    pub async fn get_webhooks(&self) -> crate::Result<Vec<Webhook>> {
        let url = self.endpoint(&["webhooks"], &[])?;
        self.get_list(url).await
    }

    pub async fn create_webhook(&self, request: &WebhookCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["webhooks"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn delete_webhook(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["webhooks", id.as_str()], &[])?;
        self.delete(url).await
    }
}
