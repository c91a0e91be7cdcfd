//! portainer-mcp: MCP server exposing a Portainer installation as tools.
//!
//! Two subcommands:
//! - `portainer-mcp stdio` (default): STDIO transport for desktop MCP clients
//! - `portainer-mcp serve`: Streamable HTTP MCP server, with hot reload of an
//!   external tool schema

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::Request;
use axum::response::IntoResponse;
use axum::Router;
use clap::{Args, Parser, Subcommand};
use portainer_mcp::{run_hot_reload, McpConfig, PortainerMcpServer, CONFIG_FILE_NAME};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt as TowerServiceExt;
use tracing_subscriber::EnvFilter;

/// MCP server for Portainer.
#[derive(Parser)]
#[command(name = "portainer-mcp", version, about = "MCP server for Portainer")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
struct GlobalArgs {
    /// Path to portainer-mcp.toml [default: ./portainer-mcp.toml or ~/.config/portainer-mcp/portainer-mcp.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Portainer host or URL
    #[arg(long, env = "PORTAINER_SERVER", global = true)]
    server: Option<String>,
    /// Portainer API key (literal or ${VAR})
    #[arg(long, env = "PORTAINER_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,
    /// YAML tool schema overriding the embedded one
    #[arg(long, global = true)]
    tools: Option<PathBuf>,
    /// Only register tools that do not modify Portainer
    #[arg(long, global = true)]
    read_only: bool,
    /// Skip the Portainer server version check at startup
    #[arg(long, global = true)]
    disable_version_check: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over STDIO
    Stdio,
    /// Serve tools over Streamable HTTP
    Serve {
        /// HTTP port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the STDIO transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli.global)?;
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("shutting down portainer-mcp");
        cancel_for_signal.cancel();
    });

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => run_stdio(config, cancel).await,
        Commands::Serve { port, host } => run_serve(config, host, port, cancel).await,
    }
}

/// Serve over Streamable HTTP via axum.
///
/// When the tool schema comes from a file, it is watched and the registry
/// rebuilt on change.
async fn run_serve(config: McpConfig, host: String, port: u16, cancel: CancellationToken) -> Result<()> {
    let server = PortainerMcpServer::build(&config)
        .await
        .context("failed to start Portainer MCP server")?;

    if let Some(tools_path) = config.tools_path.clone() {
        tokio::spawn(run_hot_reload(
            tools_path,
            config.read_only,
            server.registry_handle(),
            server.peers_handle(),
            cancel.child_token(),
        ));
    }

    let session_manager = Arc::new(LocalSessionManager::default());
    let http_config = StreamableHttpServerConfig {
        cancellation_token: cancel.clone(),
        ..Default::default()
    };
    let server_for_factory = server.clone();
    let mcp_service = StreamableHttpService::new(
        move || Ok(server_for_factory.clone()),
        session_manager,
        http_config,
    );

    let app = Router::new().fallback(move |req: Request<axum::body::Body>| {
        let svc = mcp_service.clone();
        async move {
            match svc.oneshot(req).await {
                Ok(response) => response.into_response(),
                Err(never) => match never {},
            }
        }
    });

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!(host = %host, port = %port, read_only = config.read_only, "HTTP server listening");
    tracing::info!("connect your MCP client to http://{}:{}/mcp", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("HTTP server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Serve over stdin/stdout until the client disconnects or Ctrl-C.
async fn run_stdio(config: McpConfig, cancel: CancellationToken) -> Result<()> {
    let server = PortainerMcpServer::build(&config)
        .await
        .context("failed to start Portainer MCP server")?;

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let running = server
        .serve_with_ct(transport, cancel.clone())
        .await
        .map_err(|e| anyhow::anyhow!("failed to initialize stdio transport: {:?}", e))?;

    tracing::info!(read_only = config.read_only, "stdio transport initialized, waiting for messages");

    tokio::select! {
        result = running.waiting() => {
            match result {
                Ok(reason) => tracing::info!(?reason, "stdio transport completed"),
                Err(e) => {
                    tracing::error!(error = %e, "stdio transport error");
                    return Err(anyhow::anyhow!("stdio transport error: {}", e));
                }
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("stdio transport cancelled");
        }
    }

    Ok(())
}

/// Load the config file (if any) and apply command-line overrides.
fn build_config(args: &GlobalArgs) -> Result<McpConfig> {
    let mut config = match resolve_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            McpConfig::load(&path)?
        }
        None => McpConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut McpConfig, args: &GlobalArgs) {
    if let Some(server) = &args.server {
        config.server_url = server.clone();
    }
    if let Some(token) = &args.token {
        config.token = token.clone();
    }
    if let Some(tools) = &args.tools {
        config.tools_path = Some(tools.clone());
    }
    config.read_only |= args.read_only;
    config.disable_version_check |= args.disable_version_check;
}

/// Config file lookup: explicit flag, then ./portainer-mcp.toml, then the
/// user config directory. A missing default file is not an error.
fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.exists() {
        return Ok(Some(local.to_path_buf()));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("portainer-mcp").join(CONFIG_FILE_NAME);
        if user.exists() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let mut config = McpConfig::from_toml_str(
            r#"
server_url = "portainer.local:9443"
token = "${PORTAINER_TOKEN}"
read_only = true
"#,
        )
        .unwrap();
        let args = GlobalArgs {
            server: Some("https://portainer.example.com".to_string()),
            tools: Some(PathBuf::from("custom-tools.yaml")),
            disable_version_check: true,
            ..GlobalArgs::default()
        };

        apply_overrides(&mut config, &args);
        assert_eq!(config.server_url, "https://portainer.example.com");
        assert_eq!(config.token, "${PORTAINER_TOKEN}");
        assert_eq!(config.tools_path, Some(PathBuf::from("custom-tools.yaml")));
        // a flag can turn read-only on but never off
        assert!(config.read_only);
        assert!(config.disable_version_check);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = resolve_config_path(Some(Path::new("/nonexistent/portainer-mcp.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_defaults_to_stdio() {
        let cli = Cli::try_parse_from(["portainer-mcp", "--server", "portainer.local", "--read-only"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.global.server.as_deref(), Some("portainer.local"));
        assert!(cli.global.read_only);
    }

    #[test]
    fn test_cli_serve_args() {
        let cli = Cli::try_parse_from(["portainer-mcp", "serve", "--port", "8080", "--tools", "t.yaml"])
            .unwrap();
        match cli.command {
            Some(Commands::Serve { port, host }) => {
                assert_eq!(port, 8080);
                assert_eq!(host, "127.0.0.1");
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.global.tools, Some(PathBuf::from("t.yaml")));
    }
}
