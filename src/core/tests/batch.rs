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

use google_apis_core::client::Client;
use google_apis_core::command::Command;
use google_apis_core::error::Error;
use google_apis_core::options::ClientConfig;
use http::Method;
use httptest::matchers::request::{method, path};
use httptest::matchers::*;
use httptest::{Expectation, Server, all_of, responders::*};
use std::sync::{Arc, Mutex};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const REPLY_BOUNDARY: &str = "batch_reply";

fn part(index: usize, status: &str, body: &str) -> String {
    format!(
        "--{REPLY_BOUNDARY}\r\nContent-Type: application/http\r\nContent-ID: <response-item{index}>\r\n\r\nHTTP/1.1 {status}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{body}\r\n"
    )
}

fn multipart_reply(parts: &[String]) -> impl httptest::responders::Responder + use<> {
    let body = format!("{}--{REPLY_BOUNDARY}--\r\n", parts.concat());
    status_code(200)
        .append_header(
            "content-type",
            format!("multipart/mixed; boundary={REPLY_BOUNDARY}"),
        )
        .body(body)
}

fn operation_command(id: &str) -> Command {
    Command::builder(
        Method::GET,
        "v1/projects/{projectId}/zones/{zone}/operations/{operationId}",
    )
    .path_param("projectId", "p1")
    .path_param("zone", "z1")
    .path_param("operationId", id)
    .build()
    .unwrap()
}

#[tokio::test]
async fn flush_invokes_every_handler_with_its_own_result() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![method("POST"), path("/batch")]).respond_with(
            multipart_reply(&[
                // Parts delivered out of order: Content-ID decides the slot.
                part(2, "200 OK", "{\"name\": \"op-2\"}"),
                part(0, "200 OK", "{\"name\": \"op-0\"}"),
                part(1, "404 Not Found", "{\"error\": {\"code\": 404, \"message\": \"no such operation\"}}"),
            ]),
        ),
    );
    let client = Client::new(ClientConfig::new(), &format!("http://{}", server.addr()));

    let outcomes = Arc::new(Mutex::new(vec![None, None, None]));
    let mut batch = client.batch();
    // Two call sites interleaving their queue() calls share one batch.
    for (slot, id) in [(0_usize, "op-0"), (1, "op-1"), (2, "op-2")] {
        let outcomes = Arc::clone(&outcomes);
        batch.queue::<serde_json::Value, _>(operation_command(id), move |result| {
            outcomes.lock().unwrap()[slot] = Some(result);
        });
    }
    assert_eq!(batch.len(), 3);
    batch.flush().await;

    let outcomes = Arc::try_unwrap(outcomes).unwrap().into_inner().unwrap();
    let [first, second, third]: [Option<google_apis_core::Result<serde_json::Value>>; 3] =
        outcomes.try_into().unwrap();

    let first = first.expect("slot 0 handler must fire").unwrap();
    assert_eq!(first, serde_json::json!({"name": "op-0"}));

    let err = second.expect("slot 1 handler must fire").unwrap_err();
    assert!(err.is_client(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(404));
    assert_eq!(err.message(), Some("no such operation"));

    let third = third.expect("slot 2 handler must fire").unwrap();
    assert_eq!(third, serde_json::json!({"name": "op-2"}));
    Ok(())
}

#[tokio::test]
async fn flush_sends_one_multipart_request() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("POST"),
            path("/batch"),
            request::headers(contains((
                "content-type",
                matches("multipart/mixed; boundary=batch_.*")
            ))),
            request::body(matches("Content-ID: <item0>")),
            request::body(matches("Content-ID: <item1>")),
            request::body(matches(
                "GET /v1/projects/p1/zones/z1/operations/op-0\\?key=test-key HTTP/1.1"
            )),
        ])
        .times(1)
        .respond_with(multipart_reply(&[
            part(0, "200 OK", "{}"),
            part(1, "200 OK", "{}"),
        ])),
    );
    let client = Client::new(
        ClientConfig::new().set_api_key("test-key"),
        &format!("http://{}", server.addr()),
    );
    let mut batch = client.batch();
    batch.queue::<serde_json::Value, _>(operation_command("op-0"), |_| {});
    batch.queue::<serde_json::Value, _>(operation_command("op-1"), |_| {});
    batch.flush().await;
    Ok(())
}

#[tokio::test]
async fn flush_joint_failure_reaches_every_handler() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![method("POST"), path("/batch")])
            .respond_with(status_code(503).body("overloaded")),
    );
    let client = Client::new(ClientConfig::new(), &format!("http://{}", server.addr()));

    let errors: Arc<Mutex<Vec<Error>>> = Arc::new(Mutex::new(Vec::new()));
    let mut batch = client.batch();
    for id in ["op-0", "op-1"] {
        let errors = Arc::clone(&errors);
        batch.queue::<serde_json::Value, _>(operation_command(id), move |result| {
            errors.lock().unwrap().push(result.unwrap_err());
        });
    }
    batch.flush().await;

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 2);
    for err in errors.iter() {
        assert!(err.is_server(), "{err:?}");
        assert!(err.retryable(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
    }
    Ok(())
}

#[tokio::test]
async fn flush_missing_part_fails_only_that_slot() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![method("POST"), path("/batch")])
            .respond_with(multipart_reply(&[part(0, "200 OK", "{}")])),
    );
    let client = Client::new(ClientConfig::new(), &format!("http://{}", server.addr()));

    let outcomes = Arc::new(Mutex::new(vec![None, None]));
    let mut batch = client.batch();
    for (slot, id) in [(0_usize, "op-0"), (1, "op-1")] {
        let outcomes = Arc::clone(&outcomes);
        batch.queue::<serde_json::Value, _>(operation_command(id), move |result| {
            outcomes.lock().unwrap()[slot] = Some(result);
        });
    }
    batch.flush().await;

    let outcomes = Arc::try_unwrap(outcomes).unwrap().into_inner().unwrap();
    let [first, second]: [Option<google_apis_core::Result<serde_json::Value>>; 2] =
        outcomes.try_into().unwrap();
    assert!(first.expect("slot 0 handler must fire").is_ok());
    let err = second.expect("slot 1 handler must fire").unwrap_err();
    assert!(err.is_server(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn flush_empty_batch_is_a_no_op() {
    // No server at all: an empty batch must not dispatch.
    let client = Client::new(ClientConfig::new(), "http://127.0.0.1:1");
    let batch = client.batch();
    assert!(batch.is_empty());
    batch.flush().await;
}
