use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Token")]
    pub token: String,
    #[serde(alias = "ResourceId")]
    pub resource_id: String,
    #[serde(alias = "EndpointId")]
    pub endpoint_id: i64,
    #[serde(rename = "type", alias = "Type")]
    pub kind: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebhookCreateRequest {
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    #[serde(rename = "endpointID")]
    pub endpoint_id: i64,
    #[serde(rename = "webhookType")]
    pub kind: i64,
}
