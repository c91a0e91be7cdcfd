use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::EdgeJobCreateRequest;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_EDGE_JOBS, handle_list_edge_jobs);
    registry.add_tool_if_exists(GET_EDGE_JOB, handle_get_edge_job);

    registry.add_write_tool_if_exists(CREATE_EDGE_JOB, handle_create_edge_job);
    registry.add_write_tool_if_exists(DELETE_EDGE_JOB, handle_delete_edge_job);
}

async fn handle_list_edge_jobs(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let jobs = client.get_edge_jobs().await.context("failed to get edge jobs")?;
    serde_json::to_string(&jobs).context("failed to marshal edge jobs")
}

async fn handle_get_edge_job(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let job = client.get_edge_job(id).await.context("failed to get edge job")?;
    serde_json::to_string(&job).context("failed to marshal edge job")
}

async fn handle_create_edge_job(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = EdgeJobCreateRequest {
        name: params.get_string("name", true).context("invalid name parameter")?,
        cron_expression: params
            .get_string("cronExpression", true)
            .context("invalid cronExpression parameter")?,
        recurring: params
            .get_bool("recurring", true)
            .context("invalid recurring parameter")?,
        script_content: params
            .get_string("scriptContent", true)
            .context("invalid scriptContent parameter")?,
        edge_groups: params
            .get_array_of_integers("edgeGroupIds", true)
            .context("invalid edgeGroupIds parameter")?,
    };

    let id = client
        .create_edge_job(&request)
        .await
        .context("failed to create edge job")?;
    Ok(format!("Edge job created successfully with ID {}", id))
}

async fn handle_delete_edge_job(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client.delete_edge_job(id).await.context("failed to delete edge job")?;
    Ok("Edge job deleted successfully".to_string())
}
