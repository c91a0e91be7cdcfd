use crate::client::PortainerClient;
use crate::error::{ToolContext, ToolError};
use crate::models::{PolicyConflictsRequest, PolicyCreateRequest, PolicyUpdateRequest};
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

use super::parse_optional_json_param;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_POLICIES, handle_list_policies);
    registry.add_tool_if_exists(GET_POLICY, handle_get_policy);
    registry.add_tool_if_exists(LIST_POLICY_TEMPLATES, handle_list_policy_templates);
    registry.add_tool_if_exists(GET_POLICY_TEMPLATE, handle_get_policy_template);
    registry.add_tool_if_exists(GET_POLICY_METADATA, handle_get_policy_metadata);
    registry.add_tool_if_exists(GET_POLICY_CONFLICTS, handle_get_policy_conflicts);

    registry.add_write_tool_if_exists(CREATE_POLICY, handle_create_policy);
    registry.add_write_tool_if_exists(UPDATE_POLICY, handle_update_policy);
    registry.add_write_tool_if_exists(DELETE_POLICY, handle_delete_policy);
}

/// The policy body shared by create, update and conflict checks. With
/// `required` false every field may be omitted.
fn policy_fields(params: &ToolParams, required: bool) -> Result<PolicyCreateRequest, ToolError> {
    let name = params.get_string("name", required).context("invalid name parameter")?;
    let kind = params.get_string("type", required).context("invalid type parameter")?;
    let environment_type = params
        .get_string("environmentType", required)
        .context("invalid environmentType parameter")?;
    let environment_groups = params
        .get_array_of_integers("environmentGroups", false)
        .context("invalid environmentGroups parameter")?;
    let raw = params.get_string("dataJSON", false).context("invalid dataJSON parameter")?;
    let data = parse_optional_json_param(&raw, "dataJSON")?;

    Ok(PolicyCreateRequest {
        name,
        kind,
        environment_type,
        environment_groups,
        data,
    })
}

async fn handle_list_policies(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let policies = client.get_policies().await.context("failed to get policies")?;
    serde_json::to_string(&policies).context("failed to marshal policies")
}

async fn handle_get_policy(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let policy = client.get_policy(id).await.context("failed to get policy")?;
    serde_json::to_string(&policy).context("failed to marshal policy")
}

async fn handle_create_policy(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = policy_fields(&params, true)?;
    let id = client
        .create_policy(&request)
        .await
        .context("failed to create policy")?;
    Ok(format!("Policy created successfully with ID {}", id))
}

async fn handle_update_policy(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    let fields = policy_fields(&params, false)?;
    let request = PolicyUpdateRequest {
        name: fields.name,
        kind: fields.kind,
        environment_type: fields.environment_type,
        environment_groups: fields.environment_groups,
        data: fields.data,
    };

    client
        .update_policy(id, &request)
        .await
        .context("failed to update policy")?;
    Ok(format!("Policy {} updated successfully", id))
}

async fn handle_delete_policy(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client.delete_policy(id).await.context("failed to delete policy")?;
    Ok("Policy deleted successfully".to_string())
}

async fn handle_list_policy_templates(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let category = params
        .get_string("category", false)
        .context("invalid category parameter")?;
    let policy_type = params.get_string("type", false).context("invalid type parameter")?;

    let templates = client
        .get_policy_templates(&category, &policy_type)
        .await
        .context("failed to get policy templates")?;
    serde_json::to_string(&templates).context("failed to marshal policy templates")
}

async fn handle_get_policy_template(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_string("id", true).context("invalid id parameter")?;
    let template = client
        .get_policy_template(&id)
        .await
        .context("failed to get policy template")?;
    serde_json::to_string(&template).context("failed to marshal policy template")
}

async fn handle_get_policy_metadata(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let metadata = client
        .get_policy_metadata()
        .await
        .context("failed to get policy metadata")?;
    serde_json::to_string(&metadata).context("failed to marshal policy metadata")
}

async fn handle_get_policy_conflicts(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request: PolicyConflictsRequest = policy_fields(&params, true)?;
    let conflicts = client
        .get_policy_conflicts(&request)
        .await
        .context("failed to get policy conflicts")?;
    serde_json::to_string(&conflicts).context("failed to marshal policy conflicts")
}
