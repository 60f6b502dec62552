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

//! The messages exchanged with the Kubernetes Engine API.
//!
//! Fields left unset are omitted from the wire form, so updates only touch
//! what the caller populated. Unknown fields returned by newer service
//! versions are ignored on decode.

use serde::{Deserialize, Serialize};

/// A Google Kubernetes Engine cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cluster {
    /// The name of this cluster. Must be unique within the project and zone.
    pub name: Option<String>,

    /// An optional description of this cluster.
    pub description: Option<String>,

    /// The number of nodes to create in this cluster.
    pub initial_node_count: Option<i32>,

    /// Parameters used in creating the cluster's nodes.
    pub node_config: Option<NodeConfig>,

    /// The authentication information for accessing the master endpoint.
    pub master_auth: Option<MasterAuth>,

    /// The logging service the cluster should use to write logs.
    pub logging_service: Option<String>,

    /// The monitoring service the cluster should use to write metrics.
    pub monitoring_service: Option<String>,

    /// The name of the Google Compute Engine network to which the cluster is
    /// connected.
    pub network: Option<String>,

    /// The IP address range of the container pods in this cluster.
    pub cluster_ipv4_cidr: Option<String>,

    /// Output only. The name of the Google Compute Engine zone in which the
    /// cluster resides.
    pub zone: Option<String>,

    /// Output only. The IP address of this cluster's master endpoint.
    pub endpoint: Option<String>,

    /// Output only. The software version of the master endpoint.
    pub current_master_version: Option<String>,

    /// Output only. The number of nodes currently in the cluster.
    pub current_node_count: Option<i32>,

    /// Output only. The time the cluster was created, in RFC 3339 format.
    pub create_time: Option<String>,

    /// Output only. The current status of this cluster.
    pub status: Option<String>,

    /// Output only. Additional information about the current status, if
    /// available.
    pub status_message: Option<String>,

    /// Output only. Server-defined URL for the resource.
    pub self_link: Option<String>,

    /// Output only. The resource URLs of the managed instance groups
    /// associated with this cluster.
    pub instance_group_urls: Option<Vec<String>>,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [name][Cluster::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value for [description][Cluster::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value for [initial_node_count][Cluster::initial_node_count].
    pub fn set_initial_node_count(mut self, v: i32) -> Self {
        self.initial_node_count = Some(v);
        self
    }

    /// Sets the value for [node_config][Cluster::node_config].
    pub fn set_node_config<T: Into<NodeConfig>>(mut self, v: T) -> Self {
        self.node_config = Some(v.into());
        self
    }

    /// Sets the value for [master_auth][Cluster::master_auth].
    pub fn set_master_auth<T: Into<MasterAuth>>(mut self, v: T) -> Self {
        self.master_auth = Some(v.into());
        self
    }

    /// Sets the value for [logging_service][Cluster::logging_service].
    pub fn set_logging_service<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_service = Some(v.into());
        self
    }

    /// Sets the value for [monitoring_service][Cluster::monitoring_service].
    pub fn set_monitoring_service<T: Into<String>>(mut self, v: T) -> Self {
        self.monitoring_service = Some(v.into());
        self
    }

    /// Sets the value for [network][Cluster::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value for [cluster_ipv4_cidr][Cluster::cluster_ipv4_cidr].
    pub fn set_cluster_ipv4_cidr<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_ipv4_cidr = Some(v.into());
        self
    }
}

/// Parameters that describe the nodes in a cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeConfig {
    /// The name of a Google Compute Engine machine type, e.g.
    /// `n1-standard-1`.
    pub machine_type: Option<String>,

    /// Size of the disk attached to each node, specified in GB.
    pub disk_size_gb: Option<i32>,

    /// The set of Google API scopes to be made available on all of the node
    /// VMs under the "default" service account.
    pub oauth_scopes: Option<Vec<String>>,

    /// The metadata key/value pairs assigned to instances in the cluster.
    pub metadata: Option<std::collections::HashMap<String, String>>,
}

impl NodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [machine_type][NodeConfig::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    /// Sets the value for [disk_size_gb][NodeConfig::disk_size_gb].
    pub fn set_disk_size_gb(mut self, v: i32) -> Self {
        self.disk_size_gb = Some(v);
        self
    }

    /// Sets the value for [oauth_scopes][NodeConfig::oauth_scopes].
    pub fn set_oauth_scopes<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.oauth_scopes = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the value for [metadata][NodeConfig::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

/// The authentication information for accessing the master endpoint.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MasterAuth {
    /// The username to use for HTTP basic authentication to the master
    /// endpoint.
    pub username: Option<String>,

    /// The password to use for HTTP basic authentication to the master
    /// endpoint.
    pub password: Option<String>,

    /// Output only. Base64-encoded public certificate that is the root of
    /// trust for the cluster.
    pub cluster_ca_certificate: Option<String>,

    /// Output only. Base64-encoded public certificate used by clients to
    /// authenticate to the cluster endpoint.
    pub client_certificate: Option<String>,

    /// Output only. Base64-encoded private key used by clients to
    /// authenticate to the cluster endpoint.
    pub client_key: Option<String>,
}

impl MasterAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [username][MasterAuth::username].
    pub fn set_username<T: Into<String>>(mut self, v: T) -> Self {
        self.username = Some(v.into());
        self
    }

    /// Sets the value for [password][MasterAuth::password].
    pub fn set_password<T: Into<String>>(mut self, v: T) -> Self {
        self.password = Some(v.into());
        self
    }
}

/// A request to create a cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateClusterRequest {
    /// A [cluster resource][Cluster] to create.
    pub cluster: Option<Cluster>,
}

impl CreateClusterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [cluster][CreateClusterRequest::cluster].
    pub fn set_cluster<T: Into<Cluster>>(mut self, v: T) -> Self {
        self.cluster = Some(v.into());
        self
    }
}

/// A request to update a cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateClusterRequest {
    /// A description of the update.
    pub update: Option<ClusterUpdate>,
}

impl UpdateClusterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [update][UpdateClusterRequest::update].
    pub fn set_update<T: Into<ClusterUpdate>>(mut self, v: T) -> Self {
        self.update = Some(v.into());
        self
    }
}

/// A subset of the cluster's fields that can be updated.
///
/// Exactly one field should be populated; the service rejects updates that
/// change more than one thing at a time.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterUpdate {
    /// The Kubernetes version to change the nodes to.
    pub desired_node_version: Option<String>,

    /// The monitoring service the cluster should use to write metrics.
    pub desired_monitoring_service: Option<String>,

    /// The Kubernetes version to change the master to.
    pub desired_master_version: Option<String>,
}

impl ClusterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [desired_node_version][ClusterUpdate::desired_node_version].
    pub fn set_desired_node_version<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_node_version = Some(v.into());
        self
    }

    /// Sets the value for [desired_monitoring_service][ClusterUpdate::desired_monitoring_service].
    pub fn set_desired_monitoring_service<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_monitoring_service = Some(v.into());
        self
    }

    /// Sets the value for [desired_master_version][ClusterUpdate::desired_master_version].
    pub fn set_desired_master_version<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_master_version = Some(v.into());
        self
    }
}

/// The response for listing clusters in a project and zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersResponse {
    /// A list of clusters in the project, in the specified zone or all
    /// zones.
    pub clusters: Option<Vec<Cluster>>,

    /// Zones that could not be reached while listing across all zones.
    pub missing_zones: Option<Vec<String>>,
}

impl ListClustersResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [clusters][ListClustersResponse::clusters].
    pub fn set_clusters<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<Cluster>,
    {
        self.clusters = Some(v.into_iter().map(|c| c.into()).collect());
        self
    }
}

/// An ongoing or completed server-side operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned ID for this operation.
    pub name: Option<String>,

    /// The name of the Google Compute Engine zone in which the operation is
    /// taking place.
    pub zone: Option<String>,

    /// The type of operation, e.g. `CREATE_CLUSTER`.
    pub operation_type: Option<String>,

    /// The current status of the operation.
    pub status: Option<String>,

    /// If an error has occurred, a textual description of the error.
    pub status_message: Option<String>,

    /// Server-defined URL for the resource.
    pub self_link: Option<String>,

    /// Server-defined URL for the target of the operation.
    pub target_link: Option<String>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value for [status][Operation::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// The response for listing operations in a project and zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    /// A list of operations in the project, in the specified zone or all
    /// zones.
    pub operations: Option<Vec<Operation>>,

    /// Zones that could not be reached while listing across all zones.
    pub missing_zones: Option<Vec<String>>,
}

impl ListOperationsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [operations][ListOperationsResponse::operations].
    pub fn set_operations<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<Operation>,
    {
        self.operations = Some(v.into_iter().map(|o| o.into()).collect());
        self
    }
}

/// Kubernetes Engine service configuration for a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServerConfig {
    /// The version of Kubernetes the service deploys by default.
    pub default_cluster_version: Option<String>,

    /// The list of valid node upgrade target versions.
    pub valid_node_versions: Option<Vec<String>>,

    /// The default image family.
    pub default_image_family: Option<String>,

    /// The list of valid image families.
    pub valid_image_families: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn cluster_roundtrip() -> TestResult {
        let cluster = Cluster::new()
            .set_name("c1")
            .set_initial_node_count(3)
            .set_node_config(
                NodeConfig::new()
                    .set_machine_type("n1-standard-1")
                    .set_oauth_scopes(["https://www.googleapis.com/auth/compute"]),
            )
            .set_master_auth(MasterAuth::new().set_username("admin"));
        let text = serde_json::to_string(&cluster)?;
        let got = serde_json::from_str::<Cluster>(&text)?;
        assert_eq!(got, cluster);
        Ok(())
    }

    #[test]
    fn unset_fields_stay_absent() -> TestResult {
        let cluster = Cluster::new().set_name("c1");
        let value = serde_json::to_value(&cluster)?;
        assert_eq!(value, serde_json::json!({"name": "c1"}));

        let got = serde_json::from_value::<Cluster>(value)?;
        assert_eq!(got.description, None);
        assert_eq!(got.node_config, None);
        Ok(())
    }

    #[test]
    fn wire_names_are_camel_case() -> TestResult {
        let update = UpdateClusterRequest::new()
            .set_update(ClusterUpdate::new().set_desired_node_version("1.32"));
        let value = serde_json::to_value(&update)?;
        assert_eq!(
            value,
            serde_json::json!({"update": {"desiredNodeVersion": "1.32"}})
        );
        Ok(())
    }

    #[test]
    fn unknown_wire_fields_are_ignored() -> TestResult {
        let got = serde_json::from_value::<Operation>(serde_json::json!({
            "name": "op-1",
            "status": "DONE",
            "fieldFromNewerVersion": {"a": 1}
        }))?;
        assert_eq!(got, Operation::new().set_name("op-1").set_status("DONE"));
        Ok(())
    }

    #[test]
    fn list_response_decodes() -> TestResult {
        let got = serde_json::from_value::<ListClustersResponse>(serde_json::json!({
            "clusters": [{"name": "c1"}, {"name": "c2"}],
            "missingZones": ["us-central1-x"]
        }))?;
        let names: Vec<_> = got
            .clusters
            .unwrap()
            .into_iter()
            .map(|c| c.name.unwrap())
            .collect();
        assert_eq!(names, vec!["c1", "c2"]);
        assert_eq!(got.missing_zones.unwrap(), vec!["us-central1-x"]);
        Ok(())
    }
}
