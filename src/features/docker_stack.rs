use serde_json::{Map, Value};

use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::StackEnvVar;
use crate::params::{ParamError, ToolParams};
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_DOCKER_STACKS, handle_list_docker_stacks);
    registry.add_tool_if_exists(GET_DOCKER_STACK_FILE, handle_get_docker_stack_file);

    registry.add_write_tool_if_exists(CREATE_DOCKER_STACK, handle_create_docker_stack);
    registry.add_write_tool_if_exists(UPDATE_DOCKER_STACK, handle_update_docker_stack);
    registry.add_write_tool_if_exists(DELETE_DOCKER_STACK, handle_delete_docker_stack);
    registry.add_write_tool_if_exists(START_DOCKER_STACK, handle_start_docker_stack);
    registry.add_write_tool_if_exists(STOP_DOCKER_STACK, handle_stop_docker_stack);
}

/// `env` is an optional list of `{name, value}` objects. Entries without a
/// name are dropped; non-string values are rendered as JSON text.
fn parse_env_vars(params: &ToolParams) -> Result<Vec<StackEnvVar>, ParamError> {
    let entries = params.get_array_of_objects("env", false)?;
    Ok(entries.iter().filter_map(env_var_from_object).collect())
}

fn env_var_from_object(entry: &Map<String, Value>) -> Option<StackEnvVar> {
    let name = entry.get("name").and_then(Value::as_str)?.trim();
    if name.is_empty() {
        return None;
    }
    let value = match entry.get("value") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Some(StackEnvVar {
        name: name.to_string(),
        value,
    })
}

/// `id` and `environmentId`, shared by every per-stack write tool.
fn stack_target(params: &ToolParams) -> Result<(i64, i64), crate::error::ToolError> {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let environment_id = params
        .get_int("environmentId", true)
        .context("invalid environmentId parameter")?;
    Ok((id, environment_id))
}

async fn handle_list_docker_stacks(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let stacks = client.get_docker_stacks().await.context("failed to get docker stacks")?;
    serde_json::to_string(&stacks).context("failed to marshal docker stacks")
}

async fn handle_get_docker_stack_file(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client
        .get_docker_stack_file(id)
        .await
        .context("failed to get docker stack file")
}

async fn handle_create_docker_stack(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let environment_id = params
        .get_int("environmentId", true)
        .context("invalid environmentId parameter")?;
    let name = params.get_string("name", true).context("invalid name parameter")?;
    let file = params.get_string("file", true).context("invalid file parameter")?;
    let env = parse_env_vars(&params).context("invalid env parameter")?;

    let id = client
        .create_docker_stack(environment_id, &name, &file, env)
        .await
        .context("failed to create docker stack")?;
    Ok(format!("Docker stack created successfully with ID {}", id))
}

async fn handle_update_docker_stack(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let (id, environment_id) = stack_target(&params)?;
    let file = params.get_string("file", true).context("invalid file parameter")?;
    let env = parse_env_vars(&params).context("invalid env parameter")?;
    let prune = params.get_bool("prune", false).context("invalid prune parameter")?;
    let pull_image = params
        .get_bool("pullImage", false)
        .context("invalid pullImage parameter")?;

    client
        .update_docker_stack(id, environment_id, &file, env, prune, pull_image)
        .await
        .context("failed to update docker stack")?;
    Ok("Docker stack updated successfully".to_string())
}

async fn handle_delete_docker_stack(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let (id, environment_id) = stack_target(&params)?;
    client
        .delete_docker_stack(id, environment_id)
        .await
        .context("failed to delete docker stack")?;
    Ok("Docker stack deleted successfully".to_string())
}

async fn handle_start_docker_stack(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let (id, environment_id) = stack_target(&params)?;
    client
        .start_docker_stack(id, environment_id)
        .await
        .context("failed to start docker stack")?;
    Ok("Docker stack started successfully".to_string())
}

async fn handle_stop_docker_stack(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let (id, environment_id) = stack_target(&params)?;
    client
        .stop_docker_stack(id, environment_id)
        .await
        .context("failed to stop docker stack")?;
    Ok("Docker stack stopped successfully".to_string())
}
