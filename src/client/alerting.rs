use reqwest::Method;
use serde_json::{json, Value};

use super::PortainerClient;
use crate::models::{AlertingRule, AlertingSettings};

impl PortainerClient {
    /// Current alerts, optionally filtered by `status` ("active", "silenced").
    ///
    /// The payload shape depends on the alert source, so it is kept as raw JSON.
    pub async fn get_alerts(&self, status: &str) -> crate::Result<Value> {
        let url = self.endpoint(&["observability", "alerting", "alerts"], &[("status", status)])?;
        self.get_json(url).await
    }

    pub async fn get_alert_rules(&self) -> crate::Result<Vec<AlertingRule>> {
        let url = self.endpoint(&["observability", "alerting", "rules"], &[])?;
        self.get_list(url).await
    }

    pub async fn get_alert_rule(&self, id: i64) -> crate::Result<AlertingRule> {
        let id = id.to_string();
        let url = self.endpoint(&["observability", "alerting", "rules", id.as_str()], &[])?;
        self.get_json(url).await
    }

    /// Replace an alert rule. `rule` is forwarded as-is under `alertingRule`.
    pub async fn update_alert_rule(&self, id: i64, rule: &Value) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["observability", "alerting", "rules", id.as_str()], &[])?;
        let body = json!({ "alertingRule": rule });
        self.send_unit(Method::PUT, url, Some(&body)).await
    }

    pub async fn delete_alert_rule(&self, id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&["observability", "alerting", "rules", id.as_str()], &[])?;
        self.delete(url).await
    }

    pub async fn get_alerting_settings(&self) -> crate::Result<Vec<AlertingSettings>> {
        let url = self.endpoint(&["observability", "alerting", "settings"], &[])?;
        self.get_list(url).await
    }

    /// Create a silence. An empty `alert_manager_url` lets Portainer pick the
    /// internal alert manager.
    pub async fn create_alert_silence(&self, silence: &Value, alert_manager_url: &str) -> crate::Result<()> {
        let url = self.endpoint(&["observability", "alerting", "silence"], &[])?;
        let body = json!({
            "alertManagerURL": alert_manager_url,
            "silence": silence,
        });
        self.send_unit(Method::POST, url, Some(&body)).await
    }

    pub async fn delete_alert_silence(&self, id: &str) -> crate::Result<()> {
        let url = self.endpoint(&["observability", "alerting", "silence", id], &[])?;
        self.delete(url).await
    }
}
