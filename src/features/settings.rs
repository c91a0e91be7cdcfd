use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

use super::parse_json_param;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(GET_SETTINGS, handle_get_settings);
    registry.add_write_tool_if_exists(UPDATE_SETTINGS, handle_update_settings);
}

async fn handle_get_settings(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let settings = client.get_settings().await.context("failed to get settings")?;
    serde_json::to_string(&settings).context("failed to marshal settings")
}

async fn handle_update_settings(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let raw = params
        .get_string("settingsJSON", true)
        .context("invalid settingsJSON parameter")?;
    let settings = parse_json_param(&raw, "settingsJSON")?;

    client
        .update_settings(&settings)
        .await
        .context("failed to update settings")?;
    Ok("Settings updated successfully".to_string())
}
