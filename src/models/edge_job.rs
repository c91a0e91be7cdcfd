use serde::{Deserialize, Serialize};

/// A scheduled script run on edge environments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeJob {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "CronExpression")]
    pub cron_expression: String,
    #[serde(alias = "Recurring")]
    pub recurring: bool,
    #[serde(alias = "Created")]
    pub created: i64,
    #[serde(alias = "ScriptPath", skip_serializing_if = "String::is_empty")]
    pub script_path: String,
    #[serde(alias = "EdgeGroups", deserialize_with = "super::null_as_default")]
    pub edge_groups: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeJobCreateRequest {
    pub name: String,
    pub cron_expression: String,
    pub recurring: bool,
    #[serde(rename = "fileContent")]
    pub script_content: String,
    pub edge_groups: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_null_edge_groups() {
        let job: EdgeJob = serde_json::from_value(json!({
            "Id": 9,
            "Name": "cleanup",
            "CronExpression": "0 * * * *",
            "Recurring": true,
            "EdgeGroups": null
        }))
        .unwrap();
        assert_eq!(job.id, 9);
        assert!(job.edge_groups.is_empty());
    }
}
