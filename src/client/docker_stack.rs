use reqwest::Method;
use serde::Deserialize;

use super::{CreatedId, PortainerClient};
use crate::models::{DockerStack, DockerStackCreateRequest, DockerStackUpdateRequest, StackEnvVar};

#[derive(Debug, Deserialize)]
struct StackFile {
    #[serde(rename = "StackFileContent", default)]
    stack_file_content: String,
}

impl PortainerClient {
    pub async fn get_docker_stacks(&self) -> crate::Result<Vec<DockerStack>> {
        let url = self.endpoint(&["stacks"], &[])?;
        self.get_list(url).await
    }

    /// The compose file of a stack, as plain text.
    pub async fn get_docker_stack_file(&self, id: i64) -> crate::Result<String> {
        let id = id.to_string();
        let url = self.endpoint(&["stacks", id.as_str(), "file"], &[])?;
        let file: StackFile = self.get_json(url).await?;
        Ok(file.stack_file_content)
    }

    /// Deploy a standalone compose stack on `environment_id`; returns the new stack ID.
    pub async fn create_docker_stack(
        &self,
        environment_id: i64,
        name: &str,
        compose_file: &str,
        env: Vec<StackEnvVar>,
    ) -> crate::Result<i64> {
        let environment_id = environment_id.to_string();
        let url = self.endpoint(
            &["stacks", "create", "standalone", "string"],
            &[("endpointId", environment_id.as_str())],
        )?;
        let request = DockerStackCreateRequest {
            name: name.to_string(),
            stack_file_content: compose_file.to_string(),
            env,
        };
        let created: CreatedId = self.send_json(Method::POST, url, &request).await?;
        Ok(created.id)
    }

    pub async fn update_docker_stack(
        &self,
        id: i64,
        environment_id: i64,
        compose_file: &str,
        env: Vec<StackEnvVar>,
        prune: bool,
        pull_image: bool,
    ) -> crate::Result<()> {
        let id = id.to_string();
        let environment_id = environment_id.to_string();
        let url = self.endpoint(&["stacks", id.as_str()], &[("endpointId", environment_id.as_str())])?;
        let request = DockerStackUpdateRequest {
            stack_file_content: compose_file.to_string(),
            env,
            prune,
            pull_image,
        };
        self.send_unit(Method::PUT, url, Some(&request)).await
    }

    pub async fn delete_docker_stack(&self, id: i64, environment_id: i64) -> crate::Result<()> {
        let id = id.to_string();
        let environment_id = environment_id.to_string();
        let url = self.endpoint(&["stacks", id.as_str()], &[("endpointId", environment_id.as_str())])?;
        self.delete(url).await
    }

    pub async fn start_docker_stack(&self, id: i64, environment_id: i64) -> crate::Result<()> {
        self.stack_action(id, environment_id, "start").await
    }

    pub async fn stop_docker_stack(&self, id: i64, environment_id: i64) -> crate::Result<()> {
        self.stack_action(id, environment_id, "stop").await
    }

    async fn stack_action(&self, id: i64, environment_id: i64, action: &str) -> crate::Result<()> {
        let id = id.to_string();
        let environment_id = environment_id.to_string();
        let url = self.endpoint(&["stacks", id.as_str(), action], &[("endpointId", environment_id.as_str())])?;
        self.send_unit::<()>(Method::POST, url, None).await
    }
}
