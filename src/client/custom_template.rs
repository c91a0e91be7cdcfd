use reqwest::Method;

use super::{CreatedId, PortainerClient};
use crate::models::{CustomTemplate, CustomTemplateCreateRequest};

impl PortainerClient {
    pub async fn get_custom_templates(&self) -> crate::Result<Vec<CustomTemplate>> {
        let url = self.endpoint(&["custom_templates"], &[])?;
        self.get_list(url).await
    }

    pub async fn create_custom_template(&self, request: &CustomTemplateCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["custom_templates", "create", "string"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn delete_custom_template(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["custom_templates", id.as_str()], &[])?;
        self.delete(url).await
    }
}
