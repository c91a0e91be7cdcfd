use reqwest::Method;
use serde_json::Value;

use super::PortainerClient;
use crate::models::{PortainerSettings, RawSettings};

impl PortainerClient {
    pub async fn get_settings(&self) -> crate::Result<PortainerSettings> {
        let url = self.endpoint(&["settings"], &[])?;
        let raw: RawSettings = self.get_json(url).await?;
        Ok(raw.into())
    }

    /// Apply a partial settings document exactly as given.
    pub async fn update_settings(&self, settings: &Value) -> crate::Result<()> {
        let url = self.endpoint(&["settings"], &[])?;
        self.send_unit(Method::PUT, url, Some(settings)).await
    }
}
