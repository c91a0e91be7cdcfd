use serde::Deserialize;

use super::PortainerClient;

#[derive(Debug, Deserialize)]
struct SystemVersion {
    #[serde(rename = "ServerVersion", default)]
    server_version: String,
}

impl PortainerClient {
    /// Version string reported by the Portainer server, e.g. `2.27.1`.
    pub async fn get_version(&self) -> crate::Result<String> {
        let url = self.endpoint(&["system", "version"], &[])?;
        let version: SystemVersion = self.get_json(url).await?;
        Ok(version.server_version)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::mock_portainer;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_get_version() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/system/version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ServerVersion": "2.27.3",
                "DatabaseVersion": "2.27.3"
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.get_version().await.unwrap(), "2.27.3");
    }
}
