use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An alerting rule evaluated by the Portainer observability stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertingRule {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub severity: String,
    pub condition_operator: String,
    pub threshold: f64,
    pub duration: i64,
    pub enabled: bool,
    pub is_editable: bool,
    pub is_internal: bool,
    pub metric_type: String,
    #[serde(rename = "alertManagerID")]
    pub alert_manager_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub supported_agent_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub supported_environment_types: String,
}

/// An alert manager configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertingSettings {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    pub is_internal: bool,
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "portainerURL", skip_serializing_if = "String::is_empty")]
    pub portainer_url: String,
    #[serde(
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notification_channels: Vec<AlertingNotificationChannel>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uptime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingNotificationChannel {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub config: Map<String, Value>,
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_rule_with_null_labels() {
        let rule: AlertingRule = serde_json::from_value(json!({
            "id": 2,
            "name": "High CPU",
            "severity": "critical",
            "threshold": 90.5,
            "enabled": true,
            "labels": null
        }))
        .unwrap();
        assert_eq!(rule.id, 2);
        assert!(rule.labels.is_empty());
        assert!(serde_json::to_value(&rule).unwrap().get("labels").is_none());
    }

    #[test]
    fn test_decodes_settings_with_null_channels() {
        let settings: Vec<AlertingSettings> = serde_json::from_value(json!([
            {"id": 1, "name": "internal", "enabled": true, "notificationChannels": null},
            {
                "id": 2,
                "name": "external",
                "notificationChannels": [{"id": 7, "name": "ops", "type": "slack", "config": null}]
            }
        ]))
        .unwrap();
        assert!(settings[0].notification_channels.is_empty());
        let channel = &settings[1].notification_channels[0];
        assert_eq!(channel.kind, "slack");
        assert!(channel.config.is_empty());
    }
}
