use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_AGENT_VERSIONS, handle_list_agent_versions);
    registry.add_write_tool_if_exists(UPDATE_ENVIRONMENT, handle_update_environment);
}

async fn handle_list_agent_versions(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let versions = client
        .get_agent_versions()
        .await
        .context("failed to get agent versions")?;
    serde_json::to_string(&versions).context("failed to marshal agent versions")
}

async fn handle_update_environment(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let name = params.get_string("name", false).context("invalid name parameter")?;
    let public_url = params
        .get_string("publicURL", false)
        .context("invalid publicURL parameter")?;
    let group_id = params
        .get_int("groupId", false)
        .context("invalid groupId parameter")?;

    client
        .update_environment(id, &name, &public_url, group_id)
        .await
        .context("failed to update environment")?;
    Ok("Environment updated successfully".to_string())
}
