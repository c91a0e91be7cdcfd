use serde::{Deserialize, Serialize};

/// A git credential shared across stacks and templates. The password is
/// never returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitCredential {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "AuthorizationType")]
    pub authorization_type: i64,
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "CreationDate")]
    pub creation_date: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCredentialCreateRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub authorization_type: i64,
}

/// An empty password keeps the stored one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCredentialUpdateRequest {
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub authorization_type: i64,
}
