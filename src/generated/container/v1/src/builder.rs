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

//! Request builders for the Kubernetes Engine API.
//!
//! Each builder collects the request parameters, then either `send()`s the
//! request immediately or `queue()`s it into a [Batch][gax::batch::Batch]
//! for joint dispatch. Builders also implement
//! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder], so
//! per-request options like `with_fields` and `with_quota_user` are set on
//! the same fluent chain.

/// Builders for [Clusters][crate::client::Clusters].
pub mod clusters {
    use crate::model::{
        CreateClusterRequest, Cluster, ListClustersResponse, Operation, UpdateClusterRequest,
    };
    use gax::command::Command;
    use gax::options::RequestOptions;
    use http::Method;

    const COLLECTION_PATH: &str = "v1/projects/{projectId}/zones/{zone}/clusters";
    const RESOURCE_PATH: &str = "v1/projects/{projectId}/zones/{zone}/clusters/{clusterId}";

    /// The request builder for [Clusters::list][crate::client::Clusters::list].
    #[derive(Clone, Debug)]
    pub struct List {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone, or `-` for all zones.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::GET, COLLECTION_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<ListClustersResponse> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<ListClustersResponse>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Clusters::get][crate::client::Clusters::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        cluster_id: Option<String>,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                cluster_id: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone the cluster resides in.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        /// Sets the name of the cluster to retrieve.
        pub fn set_cluster_id<V: Into<String>>(mut self, v: V) -> Self {
            self.cluster_id = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::GET, RESOURCE_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            let builder = self
                .cluster_id
                .iter()
                .fold(builder, |b, v| b.path_param("clusterId", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<Cluster> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<Cluster>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Clusters::create][crate::client::Clusters::create].
    #[derive(Clone, Debug)]
    pub struct Create {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        body: Option<CreateClusterRequest>,
        options: RequestOptions,
    }

    impl Create {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                body: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone the cluster will reside in.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        /// Sets the request body.
        pub fn set_body<V: Into<CreateClusterRequest>>(mut self, v: V) -> Self {
            self.body = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::POST, COLLECTION_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            let builder = self.body.iter().fold(builder, |b, v| b.body(v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<Operation> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<Operation>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for Create {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Clusters::update][crate::client::Clusters::update].
    #[derive(Clone, Debug)]
    pub struct Update {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        cluster_id: Option<String>,
        body: Option<UpdateClusterRequest>,
        options: RequestOptions,
    }

    impl Update {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                cluster_id: None,
                body: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone the cluster resides in.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        /// Sets the name of the cluster to update.
        pub fn set_cluster_id<V: Into<String>>(mut self, v: V) -> Self {
            self.cluster_id = Some(v.into());
            self
        }

        /// Sets the request body.
        pub fn set_body<V: Into<UpdateClusterRequest>>(mut self, v: V) -> Self {
            self.body = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::PUT, RESOURCE_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            let builder = self
                .cluster_id
                .iter()
                .fold(builder, |b, v| b.path_param("clusterId", v));
            let builder = self.body.iter().fold(builder, |b, v| b.body(v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<Operation> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<Operation>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for Update {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Clusters::delete][crate::client::Clusters::delete].
    #[derive(Clone, Debug)]
    pub struct Delete {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        cluster_id: Option<String>,
        options: RequestOptions,
    }

    impl Delete {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                cluster_id: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone the cluster resides in.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        /// Sets the name of the cluster to delete.
        pub fn set_cluster_id<V: Into<String>>(mut self, v: V) -> Self {
            self.cluster_id = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::DELETE, RESOURCE_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            let builder = self
                .cluster_id
                .iter()
                .fold(builder, |b, v| b.path_param("clusterId", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<Operation> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<Operation>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Builders for [Operations][crate::client::Operations].
pub mod operations {
    use crate::model::{ListOperationsResponse, Operation};
    use gax::command::Command;
    use gax::options::RequestOptions;
    use http::Method;

    const COLLECTION_PATH: &str = "v1/projects/{projectId}/zones/{zone}/operations";
    const RESOURCE_PATH: &str = "v1/projects/{projectId}/zones/{zone}/operations/{operationId}";

    /// The request builder for [Operations::list][crate::client::Operations::list].
    #[derive(Clone, Debug)]
    pub struct List {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        options: RequestOptions,
    }

    impl List {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone, or `-` for all zones.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::GET, COLLECTION_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<ListOperationsResponse> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<ListOperationsResponse>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for List {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    /// The request builder for [Operations::get][crate::client::Operations::get].
    #[derive(Clone, Debug)]
    pub struct Get {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        operation_id: Option<String>,
        options: RequestOptions,
    }

    impl Get {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                operation_id: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone the operation resides in.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        /// Sets the server-assigned name of the operation.
        pub fn set_operation_id<V: Into<String>>(mut self, v: V) -> Self {
            self.operation_id = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::GET, RESOURCE_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            let builder = self
                .operation_id
                .iter()
                .fold(builder, |b, v| b.path_param("operationId", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<Operation> {
            let command = self.command()?;
            self.stub.execute(command).await
        }

        /// Queues the request into `batch`; `handler` observes this
        /// request's own outcome after the batch is flushed.
        pub fn queue<F>(self, batch: &mut gax::batch::Batch, handler: F)
        where
            F: FnOnce(gax::Result<Operation>) + Send + 'static,
        {
            match self.command() {
                Ok(command) => batch.queue(command, handler),
                Err(e) => handler(Err(e)),
            }
        }
    }

    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

/// Builders for [Projects][crate::client::Projects].
pub mod projects {
    use crate::model::ServerConfig;
    use gax::command::Command;
    use gax::options::RequestOptions;
    use http::Method;

    const SERVER_CONFIG_PATH: &str = "v1/projects/{projectId}/zones/{zone}/serverconfig";

    /// The request builder for
    /// [Projects::get_server_config][crate::client::Projects::get_server_config].
    #[derive(Clone, Debug)]
    pub struct GetServerConfig {
        stub: gax::client::Client,
        project_id: Option<String>,
        zone: Option<String>,
        options: RequestOptions,
    }

    impl GetServerConfig {
        pub(crate) fn new(stub: gax::client::Client) -> Self {
            Self {
                stub,
                project_id: None,
                zone: None,
                options: RequestOptions::default(),
            }
        }

        /// Sets the Google Developers Console project ID.
        pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
            self.project_id = Some(v.into());
            self
        }

        /// Sets the zone to return operations for.
        pub fn set_zone<V: Into<String>>(mut self, v: V) -> Self {
            self.zone = Some(v.into());
            self
        }

        fn command(&self) -> gax::Result<Command> {
            let builder =
                Command::builder(Method::GET, SERVER_CONFIG_PATH).options(self.options.clone());
            let builder = self
                .project_id
                .iter()
                .fold(builder, |b, v| b.path_param("projectId", v));
            let builder = self.zone.iter().fold(builder, |b, v| b.path_param("zone", v));
            builder.build()
        }

        /// Sends the request.
        pub async fn send(self) -> gax::Result<ServerConfig> {
            let command = self.command()?;
            self.stub.execute(command).await
        }
    }

    impl gax::options::internal::RequestBuilder for GetServerConfig {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}
