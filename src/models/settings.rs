use serde::{Deserialize, Serialize};

pub const AUTH_METHOD_INTERNAL: &str = "internal";
pub const AUTH_METHOD_LDAP: &str = "ldap";
pub const AUTH_METHOD_OAUTH: &str = "oauth";
pub const AUTH_METHOD_UNKNOWN: &str = "unknown";

/// The subset of Portainer settings exposed to MCP clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortainerSettings {
    pub authentication: AuthenticationSettings,
    pub edge: EdgeSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationSettings {
    pub method: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSettings {
    pub enabled: bool,
    pub server_url: String,
}

/// `GET /settings` as returned by Portainer, reduced to the fields we project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct RawSettings {
    pub authentication_method: i64,
    pub enable_edge_compute_features: bool,
    pub edge_portainer_url: String,
}

impl From<RawSettings> for PortainerSettings {
    fn from(raw: RawSettings) -> Self {
        let method = match raw.authentication_method {
            1 => AUTH_METHOD_INTERNAL,
            2 => AUTH_METHOD_LDAP,
            3 => AUTH_METHOD_OAUTH,
            _ => AUTH_METHOD_UNKNOWN,
        };
        PortainerSettings {
            authentication: AuthenticationSettings {
                method: method.to_string(),
            },
            edge: EdgeSettings {
                enabled: raw.enable_edge_compute_features,
                server_url: raw.edge_portainer_url,
            },
        }
    }
}
