use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Portainer policy. The API speaks PascalCase here and so do we.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Policy {
    pub id: i64,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub environment_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub environment_groups: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub environment_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_groups: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Partial update; empty fields are left untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUpdateRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_groups: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A candidate policy checked against existing ones for conflicts.
pub type PolicyConflictsRequest = PolicyCreateRequest;
