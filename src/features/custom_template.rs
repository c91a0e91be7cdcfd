use crate::client::PortainerClient;
use crate::error::ToolContext;
use crate::models::CustomTemplateCreateRequest;
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(LIST_CUSTOM_TEMPLATES, handle_list_custom_templates);

    registry.add_write_tool_if_exists(CREATE_CUSTOM_TEMPLATE, handle_create_custom_template);
    registry.add_write_tool_if_exists(DELETE_CUSTOM_TEMPLATE, handle_delete_custom_template);
}

async fn handle_list_custom_templates(client: PortainerClient, _params: ToolParams) -> ToolOutcome {
    let templates = client
        .get_custom_templates()
        .await
        .context("failed to get custom templates")?;
    serde_json::to_string(&templates).context("failed to marshal custom templates")
}

async fn handle_create_custom_template(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let request = CustomTemplateCreateRequest {
        title: params.get_string("title", true).context("invalid title parameter")?,
        description: params
            .get_string("description", true)
            .context("invalid description parameter")?,
        file_content: params
            .get_string("fileContent", true)
            .context("invalid fileContent parameter")?,
        kind: params.get_int("type", true).context("invalid type parameter")?,
        platform: params
            .get_int("platform", true)
            .context("invalid platform parameter")?,
    };

    let id = client
        .create_custom_template(&request)
        .await
        .context("failed to create custom template")?;
    Ok(format!("Custom template created successfully with ID {}", id))
}

async fn handle_delete_custom_template(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let id = params.get_int("id", true).context("invalid id parameter")?;
    client
        .delete_custom_template(id)
        .await
        .context("failed to delete custom template")?;
    Ok("Custom template deleted successfully".to_string())
}
