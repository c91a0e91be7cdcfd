//! Error types for the Portainer MCP server.
//!
//! `PortainerMcpError` covers startup, configuration, and backend failures.
//! `ToolError` is the per-invocation failure surfaced to MCP clients as an
//! error-flagged tool result rather than a protocol error.

use std::fmt::Display;

use thiserror::Error;

/// Main error type for Portainer MCP operations
#[derive(Error, Debug)]
pub enum PortainerMcpError {
    /// Configuration is missing or malformed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The tool schema file could not be loaded
    #[error("failed to load tools from '{0}': {1}")]
    ToolSchema(String, String),

    /// The backend reported a version string that is not semantic
    #[error("invalid Portainer server version format: {0}")]
    InvalidVersion(String),

    /// The backend version is outside the supported range
    #[error("unsupported Portainer server version: {version}, {bound} supported version is {limit}")]
    UnsupportedVersion {
        version: String,
        bound: &'static str,
        limit: &'static str,
    },

    /// The backend answered with a non-2xx status
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure talking to the backend
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend response body was not the expected JSON
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server URL could not be turned into an API endpoint
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A call named a tool that is not registered
    #[error("tool '{0}' is not registered")]
    UnknownTool(String),
}

/// Result type alias for Portainer MCP operations
pub type Result<T> = std::result::Result<T, PortainerMcpError>;

/// Failure of a single tool invocation.
///
/// Displayed as `"<context>: <cause>"`, e.g.
/// `invalid id parameter: parameter 'id' is required`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{context}: {cause}")]
pub struct ToolError {
    pub context: String,
    pub cause: String,
}

impl ToolError {
    pub fn new(context: impl Into<String>, cause: impl Display) -> Self {
        ToolError {
            context: context.into(),
            cause: cause.to_string(),
        }
    }
}

/// Attach a static context message to any displayable error.
pub trait ToolContext<T> {
    fn context(self, context: &str) -> std::result::Result<T, ToolError>;
}

impl<T, E: Display> ToolContext<T> for std::result::Result<T, E> {
    fn context(self, context: &str) -> std::result::Result<T, ToolError> {
        self.map_err(|e| ToolError::new(context, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = PortainerMcpError::Api {
            status: 404,
            body: "stack not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 404: stack not found"
        );
    }

    #[test]
    fn test_unsupported_version_display() {
        let err = PortainerMcpError::UnsupportedVersion {
            version: "2.20.0".to_string(),
            bound: "minimum",
            limit: "2.27.0",
        };
        assert_eq!(
            err.to_string(),
            "unsupported Portainer server version: 2.20.0, minimum supported version is 2.27.0"
        );
    }

    #[test]
    fn test_tool_context_wraps_cause() {
        let result: std::result::Result<(), PortainerMcpError> =
            Err(PortainerMcpError::UnknownTool("listThings".to_string()));
        let err = result.context("failed to get things").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to get things: tool 'listThings' is not registered"
        );
    }
}
