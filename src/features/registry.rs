use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::{RegistryCreateRequest, RegistryPingRequest};
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_REGISTRIES, handle_list_registries);
    registry.add_tool_if_exists(TEST_REGISTRY_CONNECTION, handle_test_registry_connection);

    registry.add_write_tool_if_exists(CREATE_REGISTRY, handle_create_registry);
    registry.add_write_tool_if_exists(DELETE_REGISTRY, handle_delete_registry);
}

async fn handle_list_registries(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let registries = client.get_registries().await.context("failed to get registries")?;
    serde_json::to_string(&registries).context("failed to marshal registries")
}

async fn handle_create_registry(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = RegistryCreateRequest {
        name: params.get_string("name", true).context("invalid name parameter")?,
        kind: params.get_int("type", true).context("invalid type parameter")?,
        url: params.get_string("url", true).context("invalid url parameter")?,
        authentication: params
            .get_bool("authentication", false)
            .context("invalid authentication parameter")?,
        username: params
            .get_string("username", false)
            .context("invalid username parameter")?,
        password: params
            .get_string("password", false)
            .context("invalid password parameter")?,
    };

    let id = client
        .create_registry(&request)
        .await
        .context("failed to create registry")?;
    Ok(format!("Registry created successfully with ID {}", id))
}

async fn handle_delete_registry(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client.delete_registry(id).await.context("failed to delete registry")?;
    Ok("Registry deleted successfully".to_string())
}

async fn handle_test_registry_connection(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = RegistryPingRequest {
        url: params.get_string("url", true).context("invalid url parameter")?,
        kind: params.get_int("type", true).context("invalid type parameter")?,
        username: params
            .get_string("username", false)
            .context("invalid username parameter")?,
        password: params
            .get_string("password", false)
            .context("invalid password parameter")?,
    };

    let result = client
        .ping_registry(&request)
        .await
        .context("failed to test registry connection")?;
    serde_json::to_string(&result).context("failed to marshal ping result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::mock_portainer;
    use crate::features::test_support::params;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_registries() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/registries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"Id": 1, "Name": "dockerhub", "Type": 6, "URL": "docker.io", "Authentication": true, "Username": "ci"}
            ])))
            .mount(&server)
            .await;

        let text = handle_list_registries(client, params(json!({}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["name"], "dockerhub");
        assert_eq!(decoded[0]["url"], "docker.io");
        assert_eq!(decoded[0]["authentication"], true);
    }

    #[tokio::test]
    async fn test_create_registry_without_credentials() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("POST"))
            .and(path("/api/registries"))
            .and(body_json(json!({
                "name": "internal",
                "type": 3,
                "url": "registry.internal:5000",
                "authentication": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 8})))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_create_registry(
            client,
            params(json!({"name": "internal", "type": 3, "url": "registry.internal:5000"})),
        )
        .await
        .unwrap();
        assert_eq!(text, "Registry created successfully with ID 8");
    }

    #[tokio::test]
    async fn test_test_registry_connection() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("POST"))
            .and(path("/api/registries/ping"))
            .and(body_json(json!({
                "url": "registry.internal:5000",
                "type": 3,
                "username": "ci",
                "password": "token"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_test_registry_connection(
            client,
            params(json!({
                "url": "registry.internal:5000",
                "type": 3,
                "username": "ci",
                "password": "token"
            })),
        )
        .await
        .unwrap();
        assert_eq!(text, r#"{"success":true}"#);
    }

    #[tokio::test]
    async fn test_delete_registry_surfaces_backend_error() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/registries/8"))
            .respond_with(ResponseTemplate::new(403).set_body_string("access denied"))
            .mount(&server)
            .await;

        let err = handle_delete_registry(client, params(json!({"id": 8}))).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to delete registry: API request failed with status 403: access denied"
        );
    }

    #[tokio::test]
    async fn test_list_registries_sparse_payload() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/registries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "Id": 1,
                    "Name": "hub",
                    "Type": 6,
                    "URL": "docker.io",
                    "Gitlab": null,
                    "Quay": null,
                    "RegistryAccesses": null
                }
            ])))
            .mount(&server)
            .await;

        let text = handle_list_registries(client, params(json!({}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["url"], "docker.io");
        assert_eq!(decoded[0]["authentication"], false);
        assert!(decoded[0].get("username").is_none());
    }
}
