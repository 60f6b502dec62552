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

//! Builders for service clients.
//!
//! Each generated service client exposes a `builder()` returning a
//! [ClientBuilder]. The builder collects the per-service configuration and
//! produces the client:
//!
//! ```ignore
//! let client = Clusters::builder()
//!     .with_api_key("my-key")
//!     .build();
//! ```

use crate::options::ClientConfig;

/// Configures and builds a service client of type `T`.
pub struct ClientBuilder<T> {
    config: ClientConfig,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ClientBuilder<T>
where
    T: internal::FromConfig,
{
    /// Sets the endpoint, overriding the service's default origin.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config = self.config.set_endpoint(v);
        self
    }

    /// Sets the API key stamped onto every request.
    pub fn with_api_key<V: Into<String>>(mut self, v: V) -> Self {
        self.config = self.config.set_api_key(v);
        self
    }

    /// Sets the quota user stamped onto every request.
    pub fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.config = self.config.set_quota_user(v);
        self
    }

    /// Sets the user agent sent with every request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config = self.config.set_user_agent(v);
        self
    }

    /// Sets the OAuth2 bearer token sent with every request.
    pub fn with_bearer_token<V: Into<String>>(mut self, v: V) -> Self {
        self.config = self.config.set_bearer_token(v);
        self
    }

    /// Builds the client.
    pub fn build(self) -> T {
        T::from_config(self.config)
    }
}

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or
    //! removed without warnings.
    use super::{ClientBuilder, ClientConfig};

    /// Implemented by service clients so [ClientBuilder] can construct them.
    pub trait FromConfig {
        fn from_config(config: ClientConfig) -> Self;
    }

    /// Creates a builder; generated clients call this from their
    /// `builder()` function.
    pub fn new_builder<T>() -> ClientBuilder<T> {
        ClientBuilder {
            config: ClientConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }
}
