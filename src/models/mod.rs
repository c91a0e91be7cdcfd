//! Data transfer objects exchanged with the Portainer API.
//!
//! Field names serialise in the shape returned to MCP clients. Portainer
//! itself answers some endpoints in PascalCase, so those fields also accept the
//! PascalCase spelling on input via `alias`.

mod alerting;
mod custom_resource;
mod custom_template;
mod docker_stack;
mod edge_job;
mod git_credential;
mod policy;
mod registry;
mod settings;
mod webhook;

pub use alerting::{AlertingNotificationChannel, AlertingRule, AlertingSettings};
pub use custom_resource::{CustomResource, CustomResourceDefinition};
pub use custom_template::{CustomTemplate, CustomTemplateCreateRequest};
pub use docker_stack::{
    DockerStack, DockerStackCreateRequest, DockerStackUpdateRequest, StackEnvVar,
};
pub use edge_job::{EdgeJob, EdgeJobCreateRequest};
pub use git_credential::{GitCredential, GitCredentialCreateRequest, GitCredentialUpdateRequest};
pub use policy::{Policy, PolicyConflictsRequest, PolicyCreateRequest, PolicyUpdateRequest};
pub use registry::{Registry, RegistryCreateRequest, RegistryPingRequest};
pub use settings::{
    AuthenticationSettings, EdgeSettings, PortainerSettings, AUTH_METHOD_INTERNAL,
    AUTH_METHOD_LDAP, AUTH_METHOD_OAUTH, AUTH_METHOD_UNKNOWN,
};
pub use webhook::{Webhook, WebhookCreateRequest};

pub(crate) use settings::RawSettings;

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default. Portainer encodes empty slices and
/// maps as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Groups {
        #[serde(deserialize_with = "null_as_default")]
        ids: Vec<i64>,
    }

    #[test]
    fn test_null_as_default() {
        let groups: Groups = serde_json::from_value(json!({"ids": null})).unwrap();
        assert!(groups.ids.is_empty());

        let groups: Groups = serde_json::from_value(json!({})).unwrap();
        assert!(groups.ids.is_empty());

        let groups: Groups = serde_json::from_value(json!({"ids": [4, 5]})).unwrap();
        assert_eq!(groups.ids, vec![4, 5]);

        assert!(serde_json::from_value::<Groups>(json!({"ids": "4"})).is_err());
    }
}
