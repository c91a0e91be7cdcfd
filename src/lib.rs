//! Portainer MCP: exposes the Portainer REST API as MCP tools.
//!
//! Tools are declared in a YAML schema (embedded by default), wired to
//! handlers that make one Portainer request each, and served over rmcp.
//! Mutating tools are omitted in read-only mode, and the Portainer server
//! version is checked against the supported range at startup.

pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod params;
pub mod registry;
pub mod server;
pub mod tool_names;
pub mod toolset;
pub mod version;

pub use client::{ClientOptions, PortainerClient};
pub use config::{parse_env_ref, McpConfig, CONFIG_FILE_NAME};
pub use error::{PortainerMcpError, Result, ToolError};
pub use params::{ParamError, ToolParams};
pub use registry::{build_registry, ToolOutcome, ToolRegistry};
pub use server::{run_hot_reload, PortainerMcpServer, SERVER_NAME};
pub use toolset::{load_tools, ToolSchema};
pub use version::{
    check_portainer_version, MAX_SUPPORTED_PORTAINER_VERSION, MIN_SUPPORTED_PORTAINER_VERSION,
};
