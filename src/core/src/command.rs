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

//! One logical API request plus its marshaling metadata.
//!
//! Generated methods build a [Command] from an HTTP verb, a path template,
//! and the caller-supplied parameters, then hand it to
//! [Client::execute][crate::client::Client::execute] or
//! [Batch::queue][crate::batch::Batch::queue]. Both take the command by
//! value: a command is dispatched at most once, and never mutated after
//! dispatch.

use crate::options::RequestOptions;
use http::Method;

/// One logical API request: verb, resolved path, query parameters, an
/// optional encoded body, and the per-request options.
///
/// The path template is resolved when the command is built, so a missing
/// path parameter is reported before any network activity.
///
/// # Example
/// ```
/// # use google_apis_core::command::Command;
/// let command = Command::builder(
///         http::Method::GET,
///         "v1/projects/{projectId}/zones/{zone}/clusters",
///     )
///     .path_param("projectId", "p1")
///     .path_param("zone", "-")
///     .build()
///     .unwrap();
/// assert_eq!(command.path(), "v1/projects/p1/zones/-/clusters");
/// assert!(command.query().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Command {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<bytes::Bytes>,
    options: RequestOptions,
}

impl Command {
    /// Starts building a command for the given verb and path template.
    pub fn builder<T: Into<String>>(method: Method, path_template: T) -> Builder {
        Builder {
            method,
            template: path_template.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// The HTTP verb, fixed at construction.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The resolved request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, in insertion order. A name may repeat.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// The encoded request body, if any.
    pub fn body(&self) -> Option<&bytes::Bytes> {
        self.body.as_ref()
    }

    /// The effective request options.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Replaces every query parameter named `name` with a single entry, or
    /// appends one if none exists.
    ///
    /// This is how the per-service defaults (`key`, `quotaUser`) are stamped
    /// onto a command: applying the same value twice leaves the query
    /// unchanged.
    pub(crate) fn set_query_param<T: Into<String>>(&mut self, name: &str, value: T) {
        self.query.retain(|(k, _)| k != name);
        self.query.push((name.to_string(), value.into()));
    }
}

/// A builder for [Command].
#[derive(Debug)]
pub struct Builder {
    method: Method,
    template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Result<bytes::Bytes>>,
    options: RequestOptions,
}

impl Builder {
    /// Supplies the value for the `{name}` placeholder in the path template.
    pub fn path_param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter. Calling this twice with the same name
    /// produces a repeated parameter.
    ///
    /// Parameters without a value are simply never added; nothing is encoded
    /// as empty.
    pub fn query<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Encodes `body` as the JSON request payload.
    ///
    /// Encoding happens eagerly; a failure is reported by
    /// [build][Builder::build]. Optional fields left unset in `body` are
    /// omitted from the payload, so the service treats them as "leave
    /// unchanged".
    pub fn body<B: serde::Serialize>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body).map(bytes::Bytes::from));
        self
    }

    /// Sets the per-request options.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves the path template and produces the [Command].
    ///
    /// Fails with an invalid-request error when a placeholder has no
    /// matching parameter, and with a marshal error when the body could not
    /// be encoded. Neither failure reaches the network.
    pub fn build(self) -> crate::Result<Command> {
        let params = self
            .path_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        let path = crate::path_template::expand(&self.template, &params)?;
        let body = match self.body {
            None => None,
            Some(Ok(b)) => Some(b),
            Some(Err(e)) => return Err(crate::error::Error::ser(e)),
        };
        let mut options = self.options;
        options.set_default_idempotency(matches!(
            self.method,
            Method::GET | Method::PUT | Method::DELETE
        ));
        Ok(Command {
            method: self.method,
            path,
            query: self.query,
            body,
            options,
        })
    }
}
