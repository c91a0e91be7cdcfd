use serde::{Deserialize, Serialize};

/// A standalone Docker (compose) stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerStack {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(rename = "type", alias = "Type")]
    pub kind: i64,
    #[serde(alias = "Status")]
    pub status: i64,
    #[serde(alias = "EndpointId")]
    pub endpoint_id: i64,
    #[serde(alias = "EntryPoint")]
    pub entry_point: String,
    #[serde(
        alias = "Env",
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<StackEnvVar>,
    #[serde(alias = "CreatedBy")]
    pub created_by: String,
    #[serde(alias = "CreationDate")]
    pub creation_date: i64,
    #[serde(alias = "UpdateDate", skip_serializing_if = "is_zero")]
    pub update_date: i64,
    #[serde(alias = "UpdatedBy", skip_serializing_if = "String::is_empty")]
    pub updated_by: String,
    #[serde(alias = "IsComposeFormat")]
    pub is_compose_format: bool,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// A `name=value` environment variable passed to a stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackEnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerStackCreateRequest {
    pub name: String,
    pub stack_file_content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<StackEnvVar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerStackUpdateRequest {
    pub stack_file_content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<StackEnvVar>,
    pub prune: bool,
    pub pull_image: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_portainer_pascal_case() {
        let stack: DockerStack = serde_json::from_value(json!({
            "Id": 4,
            "Name": "web",
            "Type": 2,
            "EndpointId": 1,
            "Env": [{"name": "MODE", "value": "prod"}],
            "CreationDate": 1700000000,
            "IsComposeFormat": true
        }))
        .unwrap();
        assert_eq!(stack.id, 4);
        assert_eq!(stack.endpoint_id, 1);
        assert_eq!(stack.env[0].value, "prod");

        let out = serde_json::to_value(&stack).unwrap();
        assert_eq!(out["endpoint_id"], 1);
        assert_eq!(out["type"], 2);
        assert!(out.get("update_date").is_none());
    }

    #[test]
    fn test_decodes_stack_without_env() {
        let stack: DockerStack = serde_json::from_value(json!({
            "Id": 1,
            "Name": "db",
            "Type": 2,
            "EndpointId": 3,
            "Env": null,
            "CreationDate": 1700000000
        }))
        .unwrap();
        assert_eq!(stack.name, "db");
        assert!(stack.env.is_empty());
        assert!(serde_json::to_value(&stack).unwrap().get("env").is_none());
    }
}
