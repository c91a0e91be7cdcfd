use reqwest::Method;

use super::{CreatedId, PortainerClient};
use crate::models::{GitCredential, GitCredentialCreateRequest, GitCredentialUpdateRequest};

impl PortainerClient {
    pub async fn get_git_credentials(&self) -> crate::Result<Vec<GitCredential>> {
        let url = self.endpoint(&["cloud", "gitcredentials"], &[])?;
        self.get_list(url).await
    }

    pub async fn get_git_credential(&self, id: i64) -> crate::Result<GitCredential> {
        let id = id.to_string();
        let url = self.endpoint(&["cloud", "gitcredentials", id.as_str()], &[])?;
        self.get_json(url).await
    }

    pub async fn create_git_credential(&self, request: &GitCredentialCreateRequest) -> crate::Result<i64> {
        let url = self.endpoint(&["cloud", "gitcredentials"], &[])?;
        let created: CreatedId = self.send_json(Method::POST, url, request).await?;
        Ok(created.id)
    }

    pub async fn update_git_credential(
        &self,
        id: i64,
        request: &GitCredentialUpdateRequest,
    ) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["cloud", "gitcredentials", id.as_str()], &[])?;
        self.send_unit(Method::PUT, url, Some(request)).await
    }

    pub async fn delete_git_credential(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["cloud", "gitcredentials", id.as_str()], &[])?;
        self.delete(url).await
    }
}
