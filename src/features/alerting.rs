use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

use super::parse_json_param;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_ALERTS, handle_list_alerts);
    registry.add_tool_if_exists(LIST_ALERT_RULES, handle_list_alert_rules);
    registry.add_tool_if_exists(GET_ALERT_RULE, handle_get_alert_rule);
    registry.add_tool_if_exists(GET_ALERTING_SETTINGS, handle_get_alerting_settings);

    registry.add_write_tool_if_exists(UPDATE_ALERT_RULE, handle_update_alert_rule);
    registry.add_write_tool_if_exists(DELETE_ALERT_RULE, handle_delete_alert_rule);
    registry.add_write_tool_if_exists(CREATE_ALERT_SILENCE, handle_create_alert_silence);
    registry.add_write_tool_if_exists(DELETE_ALERT_SILENCE, handle_delete_alert_silence);
}

async fn handle_list_alerts(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let status = params.get_string("status", false).context("invalid status parameter")?;
    let alerts = client.get_alerts(&status).await.context("failed to get alerts")?;
    Ok(alerts.to_string())
}

async fn handle_list_alert_rules(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let rules = client.get_alert_rules().await.context("failed to get alert rules")?;
    serde_json::to_string(&rules).context("failed to marshal alert rules")
}

async fn handle_get_alert_rule(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let rule = client.get_alert_rule(id).await.context("failed to get alert rule")?;
    serde_json::to_string(&rule).context("failed to marshal alert rule")
}

async fn handle_get_alerting_settings(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let settings = client
        .get_alerting_settings()
        .await
        .context("failed to get alerting settings")?;
    serde_json::to_string(&settings).context("failed to marshal alerting settings")
}

async fn handle_update_alert_rule(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let raw = params.get_string("ruleJSON", true).context("invalid ruleJSON parameter")?;
    let rule = parse_json_param(&raw, "ruleJSON")?;

    client
        .update_alert_rule(id, &rule)
        .await
        .context("failed to update alert rule")?;
    Ok(format!("Alert rule {} updated successfully", id))
}

async fn handle_delete_alert_rule(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client.delete_alert_rule(id).await.context("failed to delete alert rule")?;
    Ok("Alert rule deleted successfully".to_string())
}

async fn handle_create_alert_silence(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let raw = params
        .get_string("silenceJSON", true)
        .context("invalid silenceJSON parameter")?;
    let alert_manager_url = params
        .get_string("alertManagerURL", false)
        .context("invalid alertManagerURL parameter")?;
    let silence = parse_json_param(&raw, "silenceJSON")?;

    client
        .create_alert_silence(&silence, &alert_manager_url)
        .await
        .context("failed to create alert silence")?;
    Ok("Alert silence created successfully".to_string())
}

async fn handle_delete_alert_silence(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_string("id", true).context("invalid id parameter")?;
    client
        .delete_alert_silence(&id)
        .await
        .context("failed to delete alert silence")?;
    Ok("Alert silence deleted successfully".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::mock_portainer;
    use crate::features::test_support::params;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_alerts_passes_status_and_returns_raw_json() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/observability/alerting/alerts"))
            .and(query_param("status", "active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"fingerprint": "abc"}])))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_list_alerts(client, params(json!({"status": "active"})))
            .await
            .unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, json!([{"fingerprint": "abc"}]));
    }

    #[tokio::test]
    async fn test_get_alert_rule_requires_id() {
        let (_server, client) = mock_portainer().await;
        let err = handle_get_alert_rule(client, params(json!({}))).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid id parameter: id is required");
    }

    #[tokio::test]
    async fn test_get_alert_rule_marshals_rule() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/observability/alerting/rules/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "name": "High CPU",
                "severity": "critical",
                "enabled": true
            })))
            .mount(&server)
            .await;

        let text = handle_get_alert_rule(client, params(json!({"id": 3}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded["id"], 3);
        assert_eq!(decoded["name"], "High CPU");
        assert_eq!(decoded["severity"], "critical");
    }

    #[tokio::test]
    async fn test_update_alert_rule_wraps_body() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("PUT"))
            .and(path("/api/observability/alerting/rules/3"))
            .and(body_json(json!({"alertingRule": {"enabled": false}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_update_alert_rule(
            client,
            params(json!({"id": 3, "ruleJSON": "{\"enabled\": false}"})),
        )
        .await
        .unwrap();
        assert_eq!(text, "Alert rule 3 updated successfully");
    }

    #[tokio::test]
    async fn test_update_alert_rule_rejects_invalid_json() {
        let (_server, client) = mock_portainer().await;
        let err = handle_update_alert_rule(client, params(json!({"id": 3, "ruleJSON": "{oops"})))
            .await
            .unwrap_err();
        assert_eq!(err.context, "invalid ruleJSON parameter");
    }

    #[tokio::test]
    async fn test_create_alert_silence() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("POST"))
            .and(path("/api/observability/alerting/silence"))
            .and(body_json(json!({
                "alertManagerURL": "",
                "silence": {"comment": "maintenance"}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_create_alert_silence(
            client,
            params(json!({"silenceJSON": "{\"comment\": \"maintenance\"}"})),
        )
        .await
        .unwrap();
        assert_eq!(text, "Alert silence created successfully");
    }

    #[tokio::test]
    async fn test_delete_alert_silence_surfaces_backend_error() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/observability/alerting/silence/sil-1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("silence not found"))
            .mount(&server)
            .await;

        let err = handle_delete_alert_silence(client, params(json!({"id": "sil-1"})))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to delete alert silence: API request failed with status 404: silence not found"
        );
    }

    #[tokio::test]
    async fn test_list_alert_rules_with_null_labels() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/observability/alerting/rules"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "name": "Node down", "severity": "critical", "enabled": true, "labels": null}
            ])))
            .mount(&server)
            .await;

        let text = handle_list_alert_rules(client, params(json!({}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["name"], "Node down");
        assert!(decoded[0].get("labels").is_none());
    }

    #[tokio::test]
    async fn test_get_alerting_settings_with_null_channels() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/observability/alerting/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "internal", "isInternal": true, "notificationChannels": null}
            ])))
            .mount(&server)
            .await;

        let text = handle_get_alerting_settings(client, params(json!({}))).await.unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["isInternal"], true);
        assert!(decoded[0].get("notificationChannels").is_none());
    }
}
