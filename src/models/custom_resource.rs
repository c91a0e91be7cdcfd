use serde::{Deserialize, Serialize};

/// A Kubernetes CustomResourceDefinition as summarised by Portainer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinition {
    pub name: String,
    pub group: String,
    pub scope: String,
    pub creation_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_namespace: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub release_version: String,
}

/// An instance of a custom resource. Cluster-scoped resources have no namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResource {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    pub definition_name: String,
    pub uid: String,
    pub creation_date: String,
}
