//! PortainerClient: thin typed wrapper over the Portainer REST API.
//!
//! Every request goes to `<server>/api/...` with the `X-API-Key` header. Any
//! non-2xx response is surfaced as [`PortainerMcpError::Api`] carrying the
//! response body verbatim, so the caller sees exactly what Portainer said.
//!
//! Resource methods live in one submodule per resource, each adding an
//! `impl PortainerClient` block.

mod alerting;
mod custom_resource;
mod custom_template;
mod docker_stack;
mod edge_job;
mod environment;
mod git_credential;
mod policy;
mod registry;
mod settings;
mod system;
mod webhook;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PortainerMcpError;

/// Header carrying the Portainer API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Connection options for [`PortainerClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Accept invalid or self-signed TLS certificates.
    pub skip_tls_verify: bool,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            skip_tls_verify: true,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Cheaply cloneable Portainer API client. Holds no session state.
#[derive(Debug, Clone)]
pub struct PortainerClient {
    http: reqwest::Client,
    base_url: Url,
}

/// `{"Id": n}` body returned by create endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedId {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
}

impl PortainerClient {
    /// Build a client for `server_url`, which may be a bare `host[:port]`
    /// (https is assumed) or a full URL.
    pub fn new(server_url: &str, token: &str, options: ClientOptions) -> crate::Result<Self> {
        let base_url = api_base_url(server_url)?;

        let mut api_key = HeaderValue::from_str(token).map_err(|_| {
            PortainerMcpError::InvalidConfig(
                "token contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.skip_tls_verify)
            .build()?;

        Ok(PortainerClient { http, base_url })
    }

    /// The `<server>/api` URL all requests are relative to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments and query pairs.
    ///
    /// Segments are percent-encoded individually; query pairs with an empty
    /// value are dropped.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> crate::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PortainerMcpError::InvalidConfig(format!(
                    "server URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        let pairs: Vec<&(&str, &str)> = query.iter().filter(|(_, v)| !v.is_empty()).collect();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs {
                serializer.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send a request, turning any non-2xx status into [`PortainerMcpError::Api`].
    async fn execute(&self, request: RequestBuilder) -> crate::Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Portainer API request failed");
            return Err(PortainerMcpError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> crate::Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> crate::Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = self.execute(self.http.get(url)).await?;
        Self::decode(response).await
    }

    /// GET a JSON array. Portainer encodes an empty list as `null`.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, url: Url) -> crate::Result<Vec<T>> {
        let list: Option<Vec<T>> = self.get_json(url).await?;
        Ok(list.unwrap_or_default())
    }

    /// GET returning the response body verbatim, for endpoints whose
    /// representation depends on the request (JSON or YAML).
    pub(crate) async fn get_text(&self, url: Url) -> crate::Result<String> {
        tracing::debug!(url = %url, "GET");
        let response = self.execute(self.http.get(url)).await?;
        Ok(response.text().await?)
    }

    /// Send `body` as JSON and decode the response.
    pub(crate) async fn send_json<B, T>(&self, method: Method, url: Url, body: &B) -> crate::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(method = %method, url = %url, "sending JSON request");
        let response = self.execute(self.http.request(method, url).json(body)).await?;
        Self::decode(response).await
    }

    /// Send an optional JSON body and ignore the response body.
    pub(crate) async fn send_unit<B>(&self, method: Method, url: Url, body: Option<&B>) -> crate::Result<()>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = %method, url = %url, "sending request");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> crate::Result<()> {
        tracing::debug!(url = %url, "DELETE");
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }
}

/// Normalise a user-supplied server address into `<scheme>://<host>[:port][/prefix]/api`.
fn api_base_url(server_url: &str) -> crate::Result<Url> {
    let trimmed = server_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(PortainerMcpError::InvalidConfig(
            "server_url is required".to_string(),
        ));
    }
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let mut url = Url::parse(&with_scheme)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(PortainerMcpError::InvalidConfig(format!(
            "unsupported server URL scheme '{}'",
            url.scheme()
        )));
    }
    url.set_query(None);
    url.set_fragment(None);
    let display = url.to_string();
    url.path_segments_mut()
        .map_err(|_| {
            PortainerMcpError::InvalidConfig(format!("server URL '{}' cannot carry a path", display))
        })?
        .pop_if_empty()
        .push("api");
    Ok(url)
}
