use super::PortainerClient;
use crate::models::{CustomResource, CustomResourceDefinition};

impl PortainerClient {
    pub async fn list_custom_resource_definitions(
        &self,
        environment_id: i64,
    ) -> crate::Result<Vec<CustomResourceDefinition>> {
        let env = environment_id.to_string();
        let url = self.endpoint(&["kubernetes", env.as_str(), "customresourcedefinitions"], &[])?;
        self.get_list(url).await
    }

    pub async fn get_custom_resource_definition(
        &self,
        environment_id: i64,
        name: &str,
    ) -> crate::Result<CustomResourceDefinition> {
        let env = environment_id.to_string();
        let url = self.endpoint(&["kubernetes", env.as_str(), "customresourcedefinitions", name], &[])?;
        self.get_json(url).await
    }

    pub async fn delete_custom_resource_definition(&self, environment_id: i64, name: &str) -> crate::Result<()> {
        let env = environment_id.to_string();
        let url = self.endpoint(&["kubernetes", env.as_str(), "customresourcedefinitions", name], &[])?;
        self.delete(url).await
    }

    pub async fn list_custom_resources(
        &self,
        environment_id: i64,
        definition: &str,
    ) -> crate::Result<Vec<CustomResource>> {
        let env = environment_id.to_string();
        let url = self.endpoint(
            &["kubernetes", env.as_str(), "customresources"],
            &[("definition", definition)],
        )?;
        self.get_list(url).await
    }

    /// Fetch a single custom resource. An empty `namespace` addresses a
    /// cluster-scoped resource; `format` ("yaml") changes the representation,
    /// so the body is returned as-is.
    pub async fn get_custom_resource(
        &self,
        environment_id: i64,
        namespace: &str,
        name: &str,
        definition: &str,
        format: &str,
    ) -> crate::Result<String> {
        let url = self.custom_resource_url(environment_id, namespace, name, &[
            ("definition", definition),
            ("format", format),
        ])?;
        self.get_text(url).await
    }

    pub async fn delete_custom_resource(
        &self,
        environment_id: i64,
        namespace: &str,
        name: &str,
        definition: &str,
    ) -> crate::Result<()> {
        let url =
            self.custom_resource_url(environment_id, namespace, name, &[("definition", definition)])?;
        self.delete(url).await
    }

    fn custom_resource_url(
        &self,
        environment_id: i64,
        namespace: &str,
        name: &str,
        query: &[(&str, &str)],
    ) -> crate::Result<url::Url> {
        let env = environment_id.to_string();
        if namespace.is_empty() {
            self.endpoint(&["kubernetes", env.as_str(), "customresources", name], query)
        } else {
            self.endpoint(&["kubernetes", env.as_str(), "customresources", namespace, name], query)
        }
    }
}
