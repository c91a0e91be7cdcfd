//! Portainer MCP configuration: deserialization and validation.

use crate::error::PortainerMcpError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory and the
/// user config directory.
pub const CONFIG_FILE_NAME: &str = "portainer-mcp.toml";

/// Strip an env var reference to its variable name.
///
/// Accepts `${VAR_NAME}` syntax only. Returns `None` if the value is not a
/// valid env-var reference.
pub fn parse_env_ref(value: &str) -> Option<&str> {
    value.strip_prefix("${").and_then(|s| s.strip_suffix('}'))
}

/// Top-level configuration, parsed from TOML and overridden by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    /// Portainer host or URL, e.g. `portainer.local:9443` or `https://portainer.example.com`.
    #[serde(default)]
    pub server_url: String,
    /// API key. Either a literal or a `${VAR}` reference.
    #[serde(default)]
    pub token: String,
    /// YAML tool schema overriding the embedded default.
    pub tools_path: Option<PathBuf>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub disable_version_check: bool,
    /// Accept self-signed certificates on the Portainer side.
    #[serde(default = "default_skip_tls_verify")]
    pub skip_tls_verify: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_skip_tls_verify() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for McpConfig {
    fn default() -> Self {
        McpConfig {
            server_url: String::new(),
            token: String::new(),
            tools_path: None,
            read_only: false,
            disable_version_check: false,
            skip_tls_verify: default_skip_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl McpConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| PortainerMcpError::InvalidConfig(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PortainerMcpError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the token, following a `${VAR}` reference into the environment.
    pub fn resolve_token(&self) -> crate::Result<String> {
        match parse_env_ref(&self.token) {
            Some(var_name) => {
                if var_name.is_empty() {
                    return Err(PortainerMcpError::InvalidConfig(
                        "token reference must name a variable, got '${}'".to_string(),
                    ));
                }
                match std::env::var(var_name) {
                    Ok(value) if !value.is_empty() => Ok(value),
                    _ => Err(PortainerMcpError::InvalidConfig(format!(
                        "token references environment variable '{}' which is not set",
                        var_name
                    ))),
                }
            }
            None => Ok(self.token.clone()),
        }
    }

    /// Validate the config, failing fast before any request reaches Portainer.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server_url.trim().is_empty() {
            return Err(PortainerMcpError::InvalidConfig(
                "server_url is required".to_string(),
            ));
        }

        if self.token.is_empty() {
            return Err(PortainerMcpError::InvalidConfig(
                "token is required".to_string(),
            ));
        }

        // Half-written references like "${TOKEN" are almost certainly typos
        if self.token.starts_with("${") && parse_env_ref(&self.token).is_none() {
            return Err(PortainerMcpError::InvalidConfig(format!(
                "token must be a literal or a ${{VAR}} reference, got '{}'",
                self.token
            )));
        }
        self.resolve_token()?;

        if self.request_timeout_secs == 0 {
            return Err(PortainerMcpError::InvalidConfig(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
