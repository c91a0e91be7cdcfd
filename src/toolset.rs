//! YAML tool schema loading.
//!
//! The schema declares every tool the server may expose: its name,
//! description, parameters and behavioural annotations. A default schema is
//! compiled into the binary; an external file can replace it at startup.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::PortainerMcpError;
use crate::version::parse_version;

/// Oldest schema document version this server understands.
pub const MINIMUM_TOOLS_VERSION: &str = "v1.0";

/// Tool schema bundled with the binary.
pub const DEFAULT_TOOLS_YAML: &str = include_str!("../tools.yaml");

/// Source label used in errors when the embedded schema is loaded.
const EMBEDDED_SOURCE: &str = "<embedded tools.yaml>";

/// Tools declared by a schema document, keyed by name.
pub type ToolSchema = HashMap<String, Tool>;

#[derive(Debug, Deserialize)]
struct ToolsDocument {
    version: String,
    #[serde(default)]
    tools: Vec<ToolDefinition>,
}

#[derive(Debug, Deserialize)]
struct ToolDefinition {
    name: String,
    description: String,
    #[serde(default)]
    parameters: Vec<ParameterDefinition>,
    annotations: Option<ToolAnnotations>,
}

#[derive(Debug, Deserialize)]
struct ParameterDefinition {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    description: String,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    items: Option<Value>,
}

const PARAMETER_TYPES: &[&str] = &["string", "number", "integer", "boolean", "array", "object"];

/// Load the schema from `path`, or the embedded default when `None`.
pub fn load_tools(path: Option<&Path>) -> crate::Result<ToolSchema> {
    match path {
        Some(path) => load_tools_from_file(path),
        None => load_tools_from_str(DEFAULT_TOOLS_YAML, EMBEDDED_SOURCE),
    }
}

pub fn load_tools_from_file(path: &Path) -> crate::Result<ToolSchema> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| PortainerMcpError::ToolSchema(source.clone(), e.to_string()))?;
    load_tools_from_str(&content, &source)
}

/// Parse a schema document. `source` only labels errors.
pub fn load_tools_from_str(content: &str, source: &str) -> crate::Result<ToolSchema> {
    let schema_err = |msg: String| PortainerMcpError::ToolSchema(source.to_string(), msg);

    let document: ToolsDocument =
        serde_yaml::from_str(content).map_err(|e| schema_err(e.to_string()))?;

    check_tools_version(&document.version).map_err(schema_err)?;

    let mut tools = HashMap::with_capacity(document.tools.len());
    for definition in document.tools {
        if tools.contains_key(&definition.name) {
            return Err(schema_err(format!("duplicate tool '{}'", definition.name)));
        }
        let tool = convert_tool(definition).map_err(schema_err)?;
        tools.insert(tool.name.to_string(), tool);
    }

    tracing::debug!(source = %source, count = tools.len(), "loaded tool schema");
    Ok(tools)
}

fn check_tools_version(version: &str) -> Result<(), String> {
    let found = parse_version(version)
        .ok_or_else(|| format!("invalid tools.yaml version '{}'", version))?;
    let minimum = parse_version(MINIMUM_TOOLS_VERSION)
        .ok_or_else(|| format!("invalid minimum tools version '{}'", MINIMUM_TOOLS_VERSION))?;
    if found < minimum {
        return Err(format!(
            "tools.yaml version {} is older than the minimum supported version {}",
            version, MINIMUM_TOOLS_VERSION
        ));
    }
    Ok(())
}

fn convert_tool(definition: ToolDefinition) -> Result<Tool, String> {
    if definition.name.is_empty() {
        return Err("tool with empty name".to_string());
    }

    let mut properties = JsonObject::new();
    let mut required = Vec::new();
    let mut seen = HashSet::new();

    for param in definition.parameters {
        if !seen.insert(param.name.clone()) {
            return Err(format!(
                "tool '{}' declares parameter '{}' twice",
                definition.name, param.name
            ));
        }
        if !PARAMETER_TYPES.contains(&param.kind.as_str()) {
            return Err(format!(
                "tool '{}' parameter '{}' has unsupported type '{}'",
                definition.name, param.name, param.kind
            ));
        }

        let mut property = JsonObject::new();
        property.insert("type".to_string(), json!(param.kind));
        if !param.description.is_empty() {
            property.insert("description".to_string(), json!(param.description));
        }
        if let Some(values) = param.enum_values {
            property.insert("enum".to_string(), Value::Array(values));
        }
        if param.kind == "array" {
            // JSON schema validators reject arrays without an items schema
            let items = param.items.unwrap_or_else(|| json!({}));
            property.insert("items".to_string(), items);
        }

        if param.required {
            required.push(Value::String(param.name.clone()));
        }
        properties.insert(param.name, Value::Object(property));
    }

    let mut input_schema = JsonObject::new();
    input_schema.insert("type".to_string(), json!("object"));
    input_schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        input_schema.insert("required".to_string(), Value::Array(required));
    }

    Ok(Tool {
        name: definition.name.into(),
        title: definition
            .annotations
            .as_ref()
            .and_then(|a| a.title.clone())
            .map(Into::into),
        description: Some(definition.description.into()),
        input_schema: Arc::new(input_schema),
        output_schema: None,
        annotations: definition.annotations,
        icons: None,
        meta: None,
    })
}
