use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::WebhookCreateRequest;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_WEBHOOKS, handle_list_webhooks);

    registry.add_write_tool_if_exists(CREATE_WEBHOOK, handle_create_webhook);
    registry.add_write_tool_if_exists(DELETE_WEBHOOK, handle_delete_webhook);
}

async fn handle_list_webhooks(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let webhooks = client.get_webhooks().await.context("failed to get webhooks")?;
    serde_json::to_string(&webhooks).context("failed to marshal webhooks")
}

async fn handle_create_webhook(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = WebhookCreateRequest {
        resource_id: params
            .get_string("resourceId", true)
            .context("invalid resourceId parameter")?,
        endpoint_id: params
            .get_int("environmentId", true)
            .context("invalid environmentId parameter")?,
        kind: params
            .get_int("webhookType", true)
            .context("invalid webhookType parameter")?,
    };

    let id = client
        .create_webhook(&request)
        .await
        .context("failed to create webhook")?;
    Ok(format!("Webhook created successfully with ID {}", id))
}

async fn handle_delete_webhook(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client.delete_webhook(id).await.context("failed to delete webhook")?;
    Ok("Webhook deleted successfully".to_string())
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
    async fn test_list_webhooks() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"Id": 1, "Token": "f3a9", "ResourceId": "svc-web", "EndpointId": 2, "Type": 1}
            ])))
            .mount(&server)
            .await;

        let text = handle_list_webhooks(client, params(json!({}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["token"], "f3a9");
        assert_eq!(decoded[0]["resource_id"], "svc-web");
        assert_eq!(decoded[0]["type"], 1);
    }

    #[tokio::test]
    async fn test_create_webhook() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("POST"))
            .and(path("/api/webhooks"))
            .and(body_json(json!({
                "resourceID": "svc-web",
                "endpointID": 2,
                "webhookType": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 6, "Token": "f3a9"})))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_create_webhook(
            client,
            params(json!({"resourceId": "svc-web", "environmentId": 2, "webhookType": 1})),
        )
        .await
        .unwrap();
        assert_eq!(text, "Webhook created successfully with ID 6");
    }

    #[tokio::test]
    async fn test_delete_webhook() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/webhooks/6"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_delete_webhook(client, params(json!({"id": 6}))).await.unwrap();
        assert_eq!(text, "Webhook deleted successfully");
    }

    #[tokio::test]
    async fn test_list_webhooks_null_body() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let text = handle_list_webhooks(client, params(json!({}))).await.unwrap();
        assert_eq!(text, "[]");
    }
}
