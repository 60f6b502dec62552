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

use google_apis_container_v1::client::{Operations, Projects};
use google_apis_container_v1::model::Operation;
use httptest::matchers::request::{method, path};
use httptest::matchers::*;
use httptest::{Expectation, Server, all_of, responders::*};
use serde_json::json;
use std::sync::{Arc, Mutex};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[tokio::test]
async fn list_operations() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/operations"),
        ])
        .respond_with(json_encoded(json!({
            "operations": [
                {"name": "op-1", "operationType": "CREATE_CLUSTER", "status": "DONE"},
                {"name": "op-2", "operationType": "DELETE_CLUSTER", "status": "RUNNING"}
            ]
        }))),
    );
    let client = Operations::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build();
    let got = client
        .list()
        .set_project_id("p1")
        .set_zone("-")
        .send()
        .await?;
    let names: Vec<_> = got
        .operations
        .unwrap()
        .into_iter()
        .map(|o| o.name.unwrap())
        .collect();
    assert_eq!(names, vec!["op-1", "op-2"]);
    Ok(())
}

#[tokio::test]
async fn get_operation() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/us-central1-a/operations/op-1"),
        ])
        .respond_with(json_encoded(json!({"name": "op-1", "status": "DONE"}))),
    );
    let client = Operations::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build();
    let got = client
        .get()
        .set_project_id("p1")
        .set_zone("us-central1-a")
        .set_operation_id("op-1")
        .send()
        .await?;
    assert_eq!(got.name.as_deref(), Some("op-1"));
    assert_eq!(got.status.as_deref(), Some("DONE"));
    Ok(())
}

#[tokio::test]
async fn get_server_config() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/us-central1-a/serverconfig"),
        ])
        .respond_with(json_encoded(json!({
            "defaultClusterVersion": "1.32.1",
            "validNodeVersions": ["1.32.1", "1.31.5"]
        }))),
    );
    let client = Projects::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build();
    let got = client
        .get_server_config()
        .set_project_id("p1")
        .set_zone("us-central1-a")
        .send()
        .await?;
    assert_eq!(got.default_cluster_version.as_deref(), Some("1.32.1"));
    assert_eq!(got.valid_node_versions.unwrap().len(), 2);
    Ok(())
}

const REPLY_BOUNDARY: &str = "batch_reply";

fn part(index: usize, status: &str, body: &str) -> String {
    format!(
        "--{REPLY_BOUNDARY}\r\nContent-Type: application/http\r\nContent-ID: <response-item{index}>\r\n\r\nHTTP/1.1 {status}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{body}\r\n"
    )
}

#[tokio::test]
async fn queued_operations_share_one_dispatch() -> Result<()> {
    let server = Server::run();
    let reply = format!(
        "{}{}--{REPLY_BOUNDARY}--\r\n",
        part(0, "200 OK", "{\"name\": \"op-1\", \"status\": \"DONE\"}"),
        part(
            1,
            "404 Not Found",
            "{\"error\": {\"code\": 404, \"message\": \"no such operation\"}}"
        ),
    );
    server.expect(
        Expectation::matching(all_of![method("POST"), path("/batch")])
            .times(1)
            .respond_with(
                status_code(200)
                    .append_header(
                        "content-type",
                        format!("multipart/mixed; boundary={REPLY_BOUNDARY}"),
                    )
                    .body(reply),
            ),
    );
    let client = Operations::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build();

    let results: Arc<Mutex<Vec<(usize, gax::Result<Operation>)>>> =
        Arc::new(Mutex::new(Vec::new()));
    let mut batch = client.batch();
    for (slot, id) in [(0_usize, "op-1"), (1, "op-2")] {
        let results = Arc::clone(&results);
        client
            .get()
            .set_project_id("p1")
            .set_zone("us-central1-a")
            .set_operation_id(id)
            .queue(&mut batch, move |result| {
                results.lock().unwrap().push((slot, result));
            });
    }
    batch.flush().await;

    let mut results = Arc::try_unwrap(results).unwrap().into_inner().unwrap();
    results.sort_by_key(|(slot, _)| *slot);
    assert_eq!(results.len(), 2);

    let (_, first) = results.remove(0);
    let operation = first?;
    assert_eq!(operation.name.as_deref(), Some("op-1"));
    assert_eq!(operation.status.as_deref(), Some("DONE"));

    let (_, second) = results.remove(0);
    let err = second.unwrap_err();
    assert!(err.is_client(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(404));
    assert_eq!(err.message(), Some("no such operation"));
    Ok(())
}
