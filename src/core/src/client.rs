// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The executor: dispatches commands and classifies their outcomes.

use crate::Result;
use crate::command::Command;
use crate::error::Error;
use crate::options::ClientConfig;

/// Executes [Command]s against a single service endpoint.
///
/// A `Client` holds the per-service defaults (endpoint, API key, quota user,
/// user agent, bearer token), all immutable after construction. Cloning is
/// cheap; clones share the underlying connection pool. Concurrent callers
/// may dispatch independent commands in parallel with no ordering between
/// them.
///
/// Each command is dispatched exactly once: [execute][Client::execute] and
/// [Batch::queue][crate::batch::Batch::queue] take it by value. The client
/// never retries on its own; it classifies failures so a caller-side policy
/// can decide.
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    quota_user: Option<String>,
    user_agent: Option<String>,
    bearer_token: Option<String>,
}

impl Client {
    /// Creates a client from the given configuration, falling back to
    /// `default_endpoint` when the configuration does not override it.
    pub fn new(config: ClientConfig, default_endpoint: &str) -> Self {
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Self {
            inner: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            quota_user: config.quota_user,
            user_agent: config.user_agent,
            bearer_token: config.bearer_token,
        }
    }

    /// The service origin this client dispatches to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts an empty [Batch][crate::batch::Batch] dispatching through this
    /// client.
    pub fn batch(&self) -> crate::batch::Batch {
        crate::batch::Batch::new(self.clone())
    }

    /// Dispatches `command` and decodes the response into `O`.
    ///
    /// A `204 No Content` response with an empty body decodes to
    /// `O::default()`. Non-2xx responses and transport failures are
    /// classified; see [crate::error::ErrorKind].
    pub async fn execute<O>(&self, mut command: Command) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        self.apply_default_parameters(&mut command);
        tracing::debug!(
            method = %command.method(),
            path = command.path(),
            "dispatching request"
        );
        let response = self.request_attempt(&command).await?;
        if !response.status().is_success() {
            return Self::to_http_error(response).await;
        }
        Self::to_http_response(response).await
    }

    /// Stamps the cross-cutting query parameters onto `command`.
    ///
    /// Only the query is touched: the path, verb, and body are left alone.
    /// Values from the request options win over the per-service defaults.
    /// Applying this twice leaves the query unchanged.
    pub(crate) fn apply_default_parameters(&self, command: &mut Command) {
        let api_key = command
            .options()
            .api_key()
            .map(str::to_string)
            .or_else(|| self.api_key.clone());
        let quota_user = command
            .options()
            .quota_user()
            .map(str::to_string)
            .or_else(|| self.quota_user.clone());
        let fields = command.options().fields().map(str::to_string);
        if let Some(v) = api_key {
            command.set_query_param("key", v);
        }
        if let Some(v) = quota_user {
            command.set_query_param("quotaUser", v);
        }
        if let Some(v) = fields {
            command.set_query_param("fields", v);
        }
    }

    async fn request_attempt(&self, command: &Command) -> Result<reqwest::Response> {
        let url = format!(
            "{}/{}",
            self.endpoint,
            command.path().trim_start_matches('/')
        );
        let mut builder = self.inner.request(command.method().clone(), url);
        builder = command
            .query()
            .iter()
            .fold(builder, |b, (k, v)| b.query(&[(k, v)]));
        let options = command.options();
        if let Some(user_agent) = options.user_agent().or(self.user_agent.as_deref()) {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(token) = options.bearer_token().or(self.bearer_token.as_deref()) {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = command.body() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(timeout);
        }
        builder.send().await.map_err(Self::map_send_error)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    pub(crate) async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
        let status_code = response.status().as_u16();
        let body = response.bytes().await.map_err(Error::io)?;
        tracing::warn!(status_code, "request failed");
        Err(Self::classify_response(status_code, body))
    }

    /// Builds a classified error from a non-2xx status code and its payload.
    pub(crate) fn classify_response(status_code: u16, body: bytes::Bytes) -> Error {
        match crate::error::Status::try_from(&body) {
            Ok(status) => Error::http(status_code, Some(status), None),
            Err(_) => {
                let payload = (!body.is_empty()).then_some(body);
                Error::http(status_code, None, payload)
            }
        }
    }

    async fn to_http_response<O>(response: reqwest::Response) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        // 204 No Content has no body and decoding it would report EOF.
        let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
        let body = response.bytes().await.map_err(Error::io)?;
        match body {
            content if content.is_empty() && no_content => Ok(O::default()),
            content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner
    }

    pub(crate) fn default_user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub(crate) fn default_bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }
}
