use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomTemplate {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: i64,
    #[serde(alias = "Platform")]
    pub platform: i64,
    #[serde(alias = "CreatedBy")]
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplateCreateRequest {
    pub title: String,
    pub description: String,
    pub file_content: String,
    #[serde(rename = "type")]
    pub kind: i64,
    pub platform: i64,
}
