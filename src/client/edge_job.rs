use reqwest::Method;

use super::{CreatedId, PortainerClient};
use crate::models::{EdgeJob, EdgeJobCreateRequest};

impl PortainerClient {
    pub async fn get_edge_jobs(&self) -> crate::Result<Vec<EdgeJob>> {
        let url = self.endpoint(&["edge_jobs"], &[])?;
        self.get_list(url).await
    }

    pub async fn get_edge_job(&self, id: i64) -> crate::Result<EdgeJob> {
        let id = id.to_string();
        let url = self.endpoint(&["edge_jobs", id.as_str()], &[])?;
        self.get_json(url).await
    }

    /// Create an edge job from inline script content; returns the new job ID.
    pub async fn create_edge_job(&self, request: &EdgeJobCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["edge_jobs", "create", "string"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn delete_edge_job(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["edge_jobs", id.as_str()], &[])?;
        self.delete(url).await
    }
}
