//! ToolRegistry: the set of tools this server exposes, with their handlers.
//!
//! Tools are registered by name against the loaded schema. A name missing from
//! the schema is skipped with a log line, so trimming `tools.yaml` is enough to
//! hide a tool. In read-only mode every mutating tool is skipped as well.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::{Map, Value};

use crate::client::PortainerClient;
use crate::error::{PortainerMcpError, ToolError};
use crate::params::ToolParams;
use crate::toolset::ToolSchema;

/// Result of a single handler: response text, or a contextualised failure.
pub type ToolOutcome = std::result::Result<String, ToolError>;

/// Type-erased tool handler.
pub type ToolHandler =
    Arc<dyn Fn(PortainerClient, ToolParams) -> BoxFuture<'static, ToolOutcome> + Send + Sync>;

struct RegisteredTool {
    tool: Tool,
    handler: ToolHandler,
}

pub struct ToolRegistry {
    schema: ToolSchema,
    read_only: bool,
    tools: HashMap<String, RegisteredTool>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ToolRegistry")
            .field("read_only", &self.read_only)
            .field("tools", &names)
            .finish()
    }
}

impl ToolRegistry {
    pub fn new(schema: ToolSchema, read_only: bool) -> Self {
        ToolRegistry {
            schema,
            read_only,
            tools: HashMap::new(),
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Register `handler` under `name` if the schema declares it.
    ///
    /// Returns whether the tool was registered.
    pub fn add_tool_if_exists<F, Fut>(&mut self, name: &str, handler: F) -> bool
    where
        F: Fn(PortainerClient, ToolParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolOutcome> + Send + 'static,
    {
        let Some(tool) = self.schema.get(name) else {
            tracing::debug!(tool = %name, "tool not found in schema, will not be registered");
            return false;
        };

        let handler: ToolHandler =
            Arc::new(move |client, params| Box::pin(handler(client, params)));
        self.tools.insert(
            name.to_string(),
            RegisteredTool {
                tool: tool.clone(),
                handler,
            },
        );
        true
    }

    /// Like [`add_tool_if_exists`](Self::add_tool_if_exists) for a mutating
    /// tool; never registered in read-only mode.
    pub fn add_write_tool_if_exists<F, Fut>(&mut self, name: &str, handler: F) -> bool
    where
        F: Fn(PortainerClient, ToolParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolOutcome> + Send + 'static,
    {
        if self.read_only {
            tracing::debug!(tool = %name, "read-only mode, skipping write tool");
            return false;
        }
        self.add_tool_if_exists(name, handler)
    }

    /// Registered tools sorted by name.
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self.tools.values().map(|r| r.tool.clone()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch a call to the named tool.
    ///
    /// Handler failures become an error-flagged result; only an unknown tool
    /// name is an `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
        client: &PortainerClient,
    ) -> crate::Result<CallToolResult> {
        let registered = self
            .tools
            .get(name)
            .ok_or_else(|| PortainerMcpError::UnknownTool(name.to_string()))?;

        let started = Instant::now();
        let outcome = (registered.handler)(client.clone(), ToolParams::from(arguments)).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        Ok(match outcome {
            Ok(text) => {
                tracing::info!(tool = %name, elapsed_ms, "tool call succeeded");
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => {
                tracing::warn!(tool = %name, elapsed_ms, error = %e, "tool call failed");
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        })
    }
}

/// Build a registry with every feature group registered against `schema`.
pub fn build_registry(schema: ToolSchema, read_only: bool) -> ToolRegistry {
    let mut registry = ToolRegistry::new(schema, read_only);
    crate::features::register_all_features(&mut registry);
    tracing::info!(
        tools = registry.len(),
        read_only,
        "tool registry built"
    );
    registry
}
