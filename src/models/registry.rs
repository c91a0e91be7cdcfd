use serde::{Deserialize, Serialize};

/// A container image registry known to Portainer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: i64,
    #[serde(alias = "URL")]
    pub url: String,
    #[serde(alias = "Authentication")]
    pub authentication: bool,
    #[serde(alias = "Username", skip_serializing_if = "String::is_empty")]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub url: String,
    pub authentication: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

/// Connectivity check against a registry before it is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryPingRequest {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}
