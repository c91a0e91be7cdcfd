use crate::client::PortainerClient;
use crate::error::{ToolContext, ToolError};
use crate::params::ToolParams;
use crate::registry::{ToolOutcome, ToolRegistry};
use crate::tool_names::*;

pub fn register(registry: &mut ToolRegistry) {
    registry.add_tool_if_exists(
        LIST_CUSTOM_RESOURCE_DEFINITIONS,
        handle_list_custom_resource_definitions,
    );
    registry.add_tool_if_exists(
        GET_CUSTOM_RESOURCE_DEFINITION,
        handle_get_custom_resource_definition,
    );
    registry.add_tool_if_exists(LIST_CUSTOM_RESOURCES, handle_list_custom_resources);
    registry.add_tool_if_exists(GET_CUSTOM_RESOURCE, handle_get_custom_resource);

    registry.add_write_tool_if_exists(
        DELETE_CUSTOM_RESOURCE_DEFINITION,
        handle_delete_custom_resource_definition,
    );
    registry.add_write_tool_if_exists(DELETE_CUSTOM_RESOURCE, handle_delete_custom_resource);
}

fn environment_id(params: &ToolParams) -> Result<i64, ToolError> {
    params
        .get_int("environmentId", true)
        .context("invalid environmentId parameter")
}

/// Addressing shared by the single custom resource tools:
/// `(name, definition, namespace)`. An empty namespace means cluster-scoped.
fn resource_target(params: &ToolParams) -> Result<(String, String, String), ToolError> {
    let name = params.get_string("name", true).context("invalid name parameter")?;
    let definition = params
        .get_string("definition", true)
        .context("invalid definition parameter")?;
    let namespace = params
        .get_string("namespace", false)
        .context("invalid namespace parameter")?;
    Ok((name, definition, namespace))
}

async fn handle_list_custom_resource_definitions(
    client: PortainerClient,
    params: ToolParams,
) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let definitions = client
        .list_custom_resource_definitions(environment_id)
        .await
        .context("failed to list custom resource definitions")?;
    serde_json::to_string(&definitions).context("failed to marshal custom resource definitions")
}

async fn handle_get_custom_resource_definition(
    client: PortainerClient,
    params: ToolParams,
) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let name = params.get_string("name", true).context("invalid name parameter")?;
    let definition = client
        .get_custom_resource_definition(environment_id, &name)
        .await
        .context("failed to get custom resource definition")?;
    serde_json::to_string(&definition).context("failed to marshal custom resource definition")
}

async fn handle_delete_custom_resource_definition(
    client: PortainerClient,
    params: ToolParams,
) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let name = params.get_string("name", true).context("invalid name parameter")?;
    client
        .delete_custom_resource_definition(environment_id, &name)
        .await
        .context("failed to delete custom resource definition")?;
    Ok(format!("Custom resource definition {} deleted successfully", name))
}

async fn handle_list_custom_resources(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let definition = params
        .get_string("definition", true)
        .context("invalid definition parameter")?;
    let resources = client
        .list_custom_resources(environment_id, &definition)
        .await
        .context("failed to list custom resources")?;
    serde_json::to_string(&resources).context("failed to marshal custom resources")
}

async fn handle_get_custom_resource(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let (name, definition, namespace) = resource_target(&params)?;
    let format = params.get_string("format", false).context("invalid format parameter")?;

    client
        .get_custom_resource(environment_id, &namespace, &name, &definition, &format)
        .await
        .context("failed to get custom resource")
}

async fn handle_delete_custom_resource(client: PortainerClient, params: ToolParams) -> ToolOutcome {
    let environment_id = environment_id(&params)?;
    let (name, definition, namespace) = resource_target(&params)?;

    client
        .delete_custom_resource(environment_id, &namespace, &name, &definition)
        .await
        .context("failed to delete custom resource")?;
    Ok(format!("Custom resource {} deleted successfully", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::mock_portainer;
    use crate::features::test_support::params;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_custom_resource_definitions() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/kubernetes/3/customresourcedefinitions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "certificates.cert-manager.io", "group": "cert-manager.io", "scope": "Namespaced"}
            ])))
            .mount(&server)
            .await;

        let text = handle_list_custom_resource_definitions(client, params(json!({"environmentId": 3})))
            .await
            .unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["name"], "certificates.cert-manager.io");
        assert_eq!(decoded[0]["scope"], "Namespaced");
    }

    #[tokio::test]
    async fn test_list_custom_resources_passes_definition() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/kubernetes/3/customresources"))
            .and(query_param("definition", "certificates.cert-manager.io"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "web-tls", "namespace": "default", "definitionName": "certificates.cert-manager.io"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_list_custom_resources(
            client,
            params(json!({"environmentId": 3, "definition": "certificates.cert-manager.io"})),
        )
        .await
        .unwrap();
        let decoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded[0]["name"], "web-tls");
    }

    #[tokio::test]
    async fn test_get_namespaced_custom_resource_as_yaml() {
        let (server, client) = mock_portainer().await;
        let yaml = "apiVersion: cert-manager.io/v1\nkind: Certificate\nmetadata:\n  name: web-tls\n";
        Mock::given(method("GET"))
            .and(path("/api/kubernetes/3/customresources/default/web-tls"))
            .and(query_param("definition", "certificates.cert-manager.io"))
            .and(query_param("format", "yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(yaml))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_get_custom_resource(
            client,
            params(json!({
                "environmentId": 3,
                "name": "web-tls",
                "definition": "certificates.cert-manager.io",
                "namespace": "default",
                "format": "yaml"
            })),
        )
        .await
        .unwrap();
        assert_eq!(text, yaml);
    }

    #[tokio::test]
    async fn test_delete_cluster_scoped_custom_resource() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/kubernetes/3/customresources/letsencrypt"))
            .and(query_param("definition", "clusterissuers.cert-manager.io"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_delete_custom_resource(
            client,
            params(json!({
                "environmentId": 3,
                "name": "letsencrypt",
                "definition": "clusterissuers.cert-manager.io"
            })),
        )
        .await
        .unwrap();
        assert_eq!(text, "Custom resource letsencrypt deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_custom_resource_definition() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("DELETE"))
            .and(path("/api/kubernetes/3/customresourcedefinitions/certificates.cert-manager.io"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let text = handle_delete_custom_resource_definition(
            client,
            params(json!({"environmentId": 3, "name": "certificates.cert-manager.io"})),
        )
        .await
        .unwrap();
        assert_eq!(
            text,
            "Custom resource definition certificates.cert-manager.io deleted successfully"
        );
    }

    #[tokio::test]
    async fn test_get_custom_resource_requires_definition() {
        let (_server, client) = mock_portainer().await;
        let err = handle_get_custom_resource(client, params(json!({"environmentId": 3, "name": "web-tls"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid definition parameter: definition is required");
    }

    #[tokio::test]
    async fn test_list_custom_resource_definitions_null_body() {
        let (server, client) = mock_portainer().await;
        Mock::given(method("GET"))
            .and(path("/api/kubernetes/2/customresourcedefinitions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let text = handle_list_custom_resource_definitions(client, params(json!({"environmentId": 2})))
            .await
            .unwrap();
        assert_eq!(text, "[]");
    }
}
