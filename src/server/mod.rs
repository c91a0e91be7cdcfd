//! PortainerMcpServer: rmcp ServerHandler backed by a ToolRegistry.
//!
//! The registry lives behind `Arc<RwLock<Arc<ToolRegistry>>>` so the
//! hot-reload task can swap the inner registry while every session keeps the
//! same outer handle and sees the new tool set on its next request.
//!
//! Connected peers are collected so a reload can broadcast
//! tools-list-changed to each of them.

pub mod hot_reload;

use std::sync::Arc;
use std::time::Duration;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{NotificationContext, Peer, RequestContext, RoleServer};
use rmcp::ErrorData as McpError;
use tokio::sync::RwLock;

use crate::client::{ClientOptions, PortainerClient};
use crate::config::McpConfig;
use crate::error::PortainerMcpError;
use crate::registry::{build_registry, ToolRegistry};
use crate::toolset::load_tools;
use crate::version::check_portainer_version;

pub use hot_reload::run_hot_reload;

/// Name reported to MCP clients during initialization.
pub const SERVER_NAME: &str = "Portainer MCP Server";

const INSTRUCTIONS: &str = "Manage a Portainer installation: stacks, edge jobs, registries, \
policies, alerting, settings and Kubernetes custom resources. Write tools are hidden when \
the server runs in read-only mode.";

/// Shared list of connected peers, pruned when a notification fails.
pub type PeerList = Arc<tokio::sync::Mutex<Vec<Peer<RoleServer>>>>;

/// Registry handle shared between sessions and the hot-reload task.
pub type RegistryHandle = Arc<RwLock<Arc<ToolRegistry>>>;

/// MCP server exposing Portainer as tools.
///
/// Clones share the registry, the peer list and the HTTP client, so
/// `StreamableHttpService` can hand one clone to each session.
#[derive(Clone)]
pub struct PortainerMcpServer {
    registry: RegistryHandle,
    peers: PeerList,
    client: PortainerClient,
}

impl PortainerMcpServer {
    pub fn new(registry: ToolRegistry, client: PortainerClient) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Arc::new(registry))),
            peers: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            client,
        }
    }

    /// Validate `config`, load the tool schema, connect to Portainer and
    /// register every tool the schema declares.
    ///
    /// Unless `disable_version_check` is set, the server's reported version
    /// must fall inside the supported range.
    pub async fn build(config: &McpConfig) -> crate::Result<Self> {
        config.validate()?;
        let token = config.resolve_token()?;
        let schema = load_tools(config.tools_path.as_deref())?;

        let options = ClientOptions {
            skip_tls_verify: config.skip_tls_verify,
            timeout: Duration::from_secs(config.request_timeout_secs),
        };
        let client = PortainerClient::new(&config.server_url, &token, options)?;

        if config.disable_version_check {
            tracing::warn!("Portainer version check disabled");
        } else {
            let version = client.get_version().await?;
            check_portainer_version(&version)?;
            tracing::info!(version = %version, "Portainer server version supported");
        }

        let registry = build_registry(schema, config.read_only);
        Ok(Self::new(registry, client))
    }

    /// Registry handle for the hot-reload task.
    pub fn registry_handle(&self) -> RegistryHandle {
        self.registry.clone()
    }

    /// Peers handle for the hot-reload task.
    pub fn peers_handle(&self) -> PeerList {
        self.peers.clone()
    }

    pub fn client(&self) -> &PortainerClient {
        &self.client
    }
}

impl ServerHandler for PortainerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let registry = self.registry.read().await.clone();
        Ok(ListToolsResult {
            tools: registry.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Dispatch to the registry. Handler failures come back as error-flagged
    /// results; only an unregistered name is a protocol error.
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        // The read lock is not held across the backend call.
        let registry = self.registry.read().await.clone();
        registry
            .call_tool(&request.name, request.arguments, &self.client)
            .await
            .map_err(|e| match e {
                PortainerMcpError::UnknownTool(_) => McpError::invalid_params(e.to_string(), None),
                other => McpError::internal_error(other.to_string(), None),
            })
    }

    async fn on_initialized(&self, context: NotificationContext<RoleServer>) {
        tracing::info!("MCP client initialized");
        self.peers.lock().await.push(context.peer.clone());
    }
}
