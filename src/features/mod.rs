//! Tool handlers, one module per Portainer resource.
//!
//! Every handler has the same shape: pull typed parameters out of the call,
//! make one Portainer request, and render the result as text. Failures at
//! either step are wrapped with a short message naming the step.

mod alerting;
mod custom_resource;
mod custom_template;
mod docker_stack;
mod edge_job;
mod environment;
mod git_credential;
mod policy;
mod registry;
mod settings;
mod webhook;

use serde_json::Value;

use crate::error::ToolError;
use crate::registry::ToolRegistry;

/// Register every feature group. Read tools are always added; write tools
/// only outside read-only mode.
pub fn register_all_features(registry: &mut ToolRegistry) {
    alerting::register(registry);
    docker_stack::register(registry);
    edge_job::register(registry);
    policy::register(registry);
    git_credential::register(registry);
    custom_template::register(registry);
    settings::register(registry);
    registry::register(registry);
    custom_resource::register(registry);
    webhook::register(registry);
    environment::register(registry);
}

/// Parse a parameter that carries a JSON document as a string.
pub(crate) fn parse_json_param(raw: &str, name: &str) -> Result<Value, ToolError> {
    serde_json::from_str(raw).map_err(|e| ToolError::new(format!("invalid {} parameter", name), e))
}

/// Like [`parse_json_param`], but an empty string means "not provided".
pub(crate) fn parse_optional_json_param(raw: &str, name: &str) -> Result<Option<Value>, ToolError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_json_param(raw, name).map(Some)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_param() {
        assert_eq!(parse_json_param(r#"{"a":1}"#, "ruleJSON").unwrap(), json!({"a": 1}));
        let err = parse_json_param("{not json", "ruleJSON").unwrap_err();
        assert_eq!(err.context, "invalid ruleJSON parameter");
    }

    #[test]
    fn test_parse_optional_json_param() {
        assert_eq!(parse_optional_json_param("", "dataJSON").unwrap(), None);
        assert_eq!(parse_optional_json_param("  ", "dataJSON").unwrap(), None);
        assert_eq!(
            parse_optional_json_param("[1]", "dataJSON").unwrap(),
            Some(json!([1]))
        );
        assert!(parse_optional_json_param("nope", "dataJSON").is_err());
    }
}
