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

//! The clients for the Kubernetes Engine API.

use gax::client_builder::ClientBuilder;
use gax::client_builder::internal::{FromConfig, new_builder};
use gax::options::ClientConfig;

/// Manages the clusters of a project, by zone.
///
/// # Example
/// ```no_run
/// # use google_apis_container_v1::client::Clusters;
/// # tokio_test::block_on(async {
/// let client = Clusters::builder()
///     .with_quota_user("tenant-17")
///     .build();
/// let cluster = client
///     .get()
///     .set_project_id("my-project")
///     .set_zone("us-central1-a")
///     .set_cluster_id("my-cluster")
///     .send()
///     .await?;
/// # gax::Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct Clusters {
    stub: gax::client::Client,
}

impl Clusters {
    /// Returns a builder for [Clusters].
    pub fn builder() -> ClientBuilder<Clusters> {
        new_builder()
    }

    /// Lists all clusters owned by a project, in the given zone or all
    /// zones (`zone = "-"`).
    pub fn list(&self) -> crate::builder::clusters::List {
        crate::builder::clusters::List::new(self.stub.clone())
    }

    /// Gets the details of a specific cluster.
    pub fn get(&self) -> crate::builder::clusters::Get {
        crate::builder::clusters::Get::new(self.stub.clone())
    }

    /// Creates a cluster, consisting of the specified number and type of
    /// Google Compute Engine instances.
    pub fn create(&self) -> crate::builder::clusters::Create {
        crate::builder::clusters::Create::new(self.stub.clone())
    }

    /// Updates the settings of a specific cluster.
    pub fn update(&self) -> crate::builder::clusters::Update {
        crate::builder::clusters::Update::new(self.stub.clone())
    }

    /// Deletes the cluster, including the Kubernetes endpoint and all worker
    /// nodes.
    pub fn delete(&self) -> crate::builder::clusters::Delete {
        crate::builder::clusters::Delete::new(self.stub.clone())
    }

    /// Starts an empty batch; queue requests into it with each builder's
    /// `queue()` and send them together with
    /// [flush][gax::batch::Batch::flush].
    pub fn batch(&self) -> gax::batch::Batch {
        self.stub.batch()
    }
}

impl FromConfig for Clusters {
    fn from_config(config: ClientConfig) -> Self {
        Self {
            stub: gax::client::Client::new(config, crate::DEFAULT_HOST),
        }
    }
}

/// Tracks the server-side operations started by cluster mutations.
#[derive(Clone, Debug)]
pub struct Operations {
    stub: gax::client::Client,
}

impl Operations {
    /// Returns a builder for [Operations].
    pub fn builder() -> ClientBuilder<Operations> {
        new_builder()
    }

    /// Lists all operations in a project, in the given zone or all zones.
    pub fn list(&self) -> crate::builder::operations::List {
        crate::builder::operations::List::new(self.stub.clone())
    }

    /// Gets the specified operation.
    pub fn get(&self) -> crate::builder::operations::Get {
        crate::builder::operations::Get::new(self.stub.clone())
    }

    /// Starts an empty batch; queue requests into it with each builder's
    /// `queue()` and send them together with
    /// [flush][gax::batch::Batch::flush].
    pub fn batch(&self) -> gax::batch::Batch {
        self.stub.batch()
    }
}

impl FromConfig for Operations {
    fn from_config(config: ClientConfig) -> Self {
        Self {
            stub: gax::client::Client::new(config, crate::DEFAULT_HOST),
        }
    }
}

/// Project-level configuration of the Kubernetes Engine service.
#[derive(Clone, Debug)]
pub struct Projects {
    stub: gax::client::Client,
}

impl Projects {
    /// Returns a builder for [Projects].
    pub fn builder() -> ClientBuilder<Projects> {
        new_builder()
    }

    /// Returns the configuration of the Kubernetes Engine service in a
    /// zone, e.g. the available versions.
    pub fn get_server_config(&self) -> crate::builder::projects::GetServerConfig {
        crate::builder::projects::GetServerConfig::new(self.stub.clone())
    }
}

impl FromConfig for Projects {
    fn from_config(config: ClientConfig) -> Self {
        Self {
            stub: gax::client::Client::new(config, crate::DEFAULT_HOST),
        }
    }
}
