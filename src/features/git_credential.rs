use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::{GitCredentialCreateRequest, GitCredentialUpdateRequest};
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_GIT_CREDENTIALS, handle_list_git_credentials);
    registry.add_tool_if_exists(GET_GIT_CREDENTIAL, handle_get_git_credential);

    registry.add_write_tool_if_exists(CREATE_GIT_CREDENTIAL, handle_create_git_credential);
    registry.add_write_tool_if_exists(UPDATE_GIT_CREDENTIAL, handle_update_git_credential);
    registry.add_write_tool_if_exists(DELETE_GIT_CREDENTIAL, handle_delete_git_credential);
}

async fn handle_list_git_credentials(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let credentials = client
        .get_git_credentials()
        .await
        .context("failed to get git credentials")?;
    serde_json::to_string(&credentials).context("failed to marshal git credentials")
}

async fn handle_get_git_credential(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let credential = client
        .get_git_credential(id)
        .await
        .context("failed to get git credential")?;
    serde_json::to_string(&credential).context("failed to marshal git credential")
}

async fn handle_create_git_credential(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = GitCredentialCreateRequest {
        name: params.get_string("name", true).context("invalid name parameter")?,
        username: params
            .get_string("username", true)
            .context("invalid username parameter")?,
        password: params
            .get_string("password", true)
            .context("invalid password parameter")?,
        authorization_type: params
            .get_int("authorizationType", true)
            .context("invalid authorizationType parameter")?,
    };

    let id = client
        .create_git_credential(&request)
        .await
        .context("failed to create git credential")?;
    Ok(format!("Git credential created successfully with ID {}", id))
}

async fn handle_update_git_credential(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let request = GitCredentialUpdateRequest {
        name: params.get_string("name", true).context("invalid name parameter")?,
        username: params
            .get_string("username", true)
            .context("invalid username parameter")?,
        password: params
            .get_string("password", false)
            .context("invalid password parameter")?,
        authorization_type: params
            .get_int("authorizationType", true)
            .context("invalid authorizationType parameter")?,
    };

    client
        .update_git_credential(id, &request)
        .await
        .context("failed to update git credential")?;
    Ok("Git credential updated successfully".to_string())
}

async fn handle_delete_git_credential(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client
        .delete_git_credential(id)
        .await
        .context("failed to delete git credential")?;
    Ok("Git credential deleted successfully".to_string())
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
    async fn test_get_git_credential() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/cloud/gitcredentials/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 4,
                "name": "github",
                "username": "deployer",
                "authorizationType": 0
            })))
            .mount(&server)
            .await;

        let text = handle_get_git_credential(client, params(json!({"id": 4}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded["name"], "github");
        assert_eq!(decoded["username"], "deployer");
        assert!(decoded.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_git_credential() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("POST"))
            .and(path("/api/cloud/gitcredentials"))
            .and(body_json(json!({
                "name": "github",
                "username": "deployer",
                "password": "s3cret",
                "authorizationType": 0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_create_git_credential(
            client,
            params(json!({
                "name": "github",
                "username": "deployer",
                "password": "s3cret",
                "authorizationType": 0
            })),
        )
        .await
        .unwrap();
        assert_eq!(text, "Git credential created successfully with ID 4");
    }

    #[tokio::test]
    async fn test_create_git_credential_requires_password() {
        let (_server, client) = mock_portainer().await;
        let err = handle_create_git_credential(
            client,
            params(json!({"name": "github", "username": "deployer", "authorizationType": 0})),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid password parameter: password is required");
    }

    #[tokio::test]
    async fn test_update_git_credential_without_password() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("PUT"))
            .and(path("/api/cloud/gitcredentials/4"))
            .and(body_json(json!({
                "name": "github",
                "username": "ci",
                "authorizationType": 0
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_update_git_credential(
            client,
            params(json!({"id": 4, "name": "github", "username": "ci", "authorizationType": 0})),
        )
        .await
        .unwrap();
        assert_eq!(text, "Git credential updated successfully");
    }

    #[tokio::test]
    async fn test_delete_git_credential() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/cloud/gitcredentials/4"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_delete_git_credential(client, params(json!({"id": 4}))).await.unwrap();
        assert_eq!(text, "Git credential deleted successfully");
    }

    #[tokio::test]
    async fn test_list_git_credentials_null_body() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/cloud/gitcredentials"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let text = handle_list_git_credentials(client, params(json!({}))).await.unwrap();
        assert_eq!(text, "[]");
    }
}
