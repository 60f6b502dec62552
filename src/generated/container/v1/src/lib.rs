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

//! Google APIs Client Libraries for Rust - Kubernetes Engine API.
//!
//! The Google Kubernetes Engine API builds and manages container-based
//! clusters. This crate covers the zone-scoped cluster and operation
//! resources.
//!
//! # Example
//! ```no_run
//! # use google_apis_container_v1::client::Clusters;
//! # tokio_test::block_on(async {
//! let client = Clusters::builder().build();
//! let response = client
//!     .list()
//!     .set_project_id("my-project")
//!     .set_zone("-")
//!     .send()
//!     .await?;
//! for cluster in response.clusters.into_iter().flatten() {
//!     println!("{:?}", cluster.name);
//! }
//! # gax::Result::<()>::Ok(()) });
//! ```

/// The default service endpoint.
pub(crate) const DEFAULT_HOST: &str = "https://container.googleapis.com/";

pub mod builder;
pub mod client;
pub mod model;

/// The result type used by all RPCs in this crate.
pub use gax::Result;
