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

//! Client configuration and per-request options.
//!
//! [ClientConfig] holds the per-service defaults: the endpoint, the API key,
//! and the quota user. It is consumed when the client is built and immutable
//! afterwards, so concurrent requests share nothing mutable.
//!
//! [RequestOptions] customizes a single call: the `fields` partial-response
//! mask, a quota user or API key override, a per-attempt timeout. The
//! `*Builder` returned by each generated method implements
//! [RequestOptionsBuilder] so applications can set these fluently.

/// A set of options configuring a single request.
///
/// Applications use this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    fields: Option<String>,
    quota_user: Option<String>,
    api_key: Option<String>,
    bearer_token: Option<String>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    idempotent: Option<bool>,
}

impl RequestOptions {
    /// Gets the current partial-response field mask.
    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref()
    }

    /// Selects which fields of the response to return.
    ///
    /// The mask is passed through to the service verbatim as the `fields`
    /// query parameter.
    pub fn set_fields<T: Into<String>>(&mut self, v: T) {
        self.fields = Some(v.into());
    }

    /// Gets the current quota user override.
    pub fn quota_user(&self) -> Option<&str> {
        self.quota_user.as_deref()
    }

    /// Attributes this request to an end user for quota purposes, overriding
    /// the per-service default.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    /// Gets the current API key override.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Overrides the per-service API key for this request.
    pub fn set_api_key<T: Into<String>>(&mut self, v: T) {
        self.api_key = Some(v.into());
    }

    /// Gets the current bearer token override.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Authorizes this request with the given OAuth2 bearer token, overriding
    /// the per-service default.
    pub fn set_bearer_token<T: Into<String>>(&mut self, v: T) {
        self.bearer_token = Some(v.into());
    }

    /// Gets the current user-agent override.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Sets the user agent header value for this request.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> Option<std::time::Duration> {
        self.attempt_timeout
    }

    /// Sets the deadline for this dispatch.
    ///
    /// An expired deadline surfaces as a retryable error; whether to re-send
    /// is a caller-side policy decision.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the request underlying this method as idempotent.
    ///
    /// The client libraries provide a default based on the HTTP method; this
    /// overrides it. Caller-side retry policies consult the value.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency for the request unless it is already set.
    ///
    /// The client libraries use this to provide a default value derived from
    /// the HTTP method.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }
}

/// The per-service configuration, consumed when a client is built.
///
/// All values are defaults: a [RequestOptions] override on an individual
/// request wins. After the client is built the configuration is immutable,
/// every in-flight request observes the same snapshot.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub(crate) endpoint: Option<String>,
    pub(crate) api_key: Option<String>,
    pub(crate) quota_user: Option<String>,
    pub(crate) user_agent: Option<String>,
    pub(crate) bearer_token: Option<String>,
}

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint, overriding the service's default origin.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the API key stamped onto every request as the `key` query
    /// parameter.
    pub fn set_api_key<T: Into<String>>(mut self, v: T) -> Self {
        self.api_key = Some(v.into());
        self
    }

    /// Sets the quota user stamped onto every request as the `quotaUser`
    /// query parameter.
    pub fn set_quota_user<T: Into<String>>(mut self, v: T) -> Self {
        self.quota_user = Some(v.into());
        self
    }

    /// Sets the user agent sent with every request.
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// Sets the OAuth2 bearer token sent with every request.
    ///
    /// Token acquisition and refresh are the application's concern; the
    /// client sends whatever it is given.
    pub fn set_bearer_token<T: Into<String>>(mut self, v: T) -> Self {
        self.bearer_token = Some(v.into());
        self
    }
}

/// Implementations of this trait provide setters to configure request
/// options.
///
/// Each generated method returns a builder implementing this trait, so the
/// request parameters and the per-request options are set through one fluent
/// surface.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Selects which fields of the response to return.
    fn with_fields<V: Into<String>>(self, v: V) -> Self;

    /// Attributes this request to an end user for quota purposes.
    fn with_quota_user<V: Into<String>>(self, v: V) -> Self;

    /// Overrides the per-service API key for this request.
    fn with_api_key<V: Into<String>>(self, v: V) -> Self;

    /// Authorizes this request with the given OAuth2 bearer token.
    fn with_bearer_token<V: Into<String>>(self, v: V) -> Self;

    /// Sets the user agent header value.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the deadline for this dispatch.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// If `v` is `true`, treat the request underlying this method as
    /// idempotent.
    fn with_idempotency(self, v: bool) -> Self;
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or
    //! removed without warnings. Applications should not use any types
    //! contained within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_fields<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_fields(v);
        self
    }

    fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_user(v);
        self
    }

    fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_api_key(v);
        self
    }

    fn with_bearer_token<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_bearer_token(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }
}
