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
use google_apis_core::error::ErrorKind;
use google_apis_core::options::{ClientConfig, RequestOptions};
use http::Method;
use httptest::matchers::request::{method, path};
use httptest::matchers::*;
use httptest::{Expectation, Server, all_of, responders::*};
use serde::{Deserialize, Serialize};
use serde_json::json;
use test_case::test_case;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestResource {
    name: Option<String>,
    description: Option<String>,
}

fn test_client(server: &Server, config: ClientConfig) -> Client {
    Client::new(config, &format!("http://{}", server.addr()))
}

fn clusters_command() -> Command {
    Command::builder(
        Method::GET,
        "v1/projects/{projectId}/zones/{zone}/clusters",
    )
    .path_param("projectId", "p1")
    .path_param("zone", "-")
    .build()
    .unwrap()
}

#[tokio::test]
async fn execute_get_decodes_response() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/clusters"),
        ])
        .respond_with(json_encoded(json!({"name": "c1"}))),
    );
    let client = test_client(&server, ClientConfig::new());
    let got: TestResource = client.execute(clusters_command()).await?;
    assert_eq!(got.name.as_deref(), Some("c1"));
    assert_eq!(got.description, None);
    Ok(())
}

#[tokio::test]
async fn execute_injects_service_defaults() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/clusters"),
            request::query(url_decoded(contains(("key", "test-key")))),
            request::query(url_decoded(contains(("quotaUser", "user-a")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = test_client(
        &server,
        ClientConfig::new()
            .set_api_key("test-key")
            .set_quota_user("user-a"),
    );
    let _: TestResource = client.execute(clusters_command()).await?;
    Ok(())
}

#[tokio::test]
async fn execute_omits_absent_parameters() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/clusters"),
            request::query(url_decoded(not(contains(key("key"))))),
            request::query(url_decoded(not(contains(key("quotaUser"))))),
            request::query(url_decoded(not(contains(key("fields"))))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = test_client(&server, ClientConfig::new());
    let _: TestResource = client.execute(clusters_command()).await?;
    Ok(())
}

#[tokio::test]
async fn execute_request_options_override_defaults() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/clusters"),
            request::query(url_decoded(contains(("quotaUser", "per-call")))),
            request::query(url_decoded(contains(("fields", "items(name)")))),
            request::query(url_decoded(contains(("key", "service-key")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = test_client(
        &server,
        ClientConfig::new()
            .set_api_key("service-key")
            .set_quota_user("service-user"),
    );
    let mut options = RequestOptions::default();
    options.set_quota_user("per-call");
    options.set_fields("items(name)");
    let command = Command::builder(
        Method::GET,
        "v1/projects/{projectId}/zones/{zone}/clusters",
    )
    .path_param("projectId", "p1")
    .path_param("zone", "-")
    .options(options)
    .build()?;
    let _: TestResource = client.execute(command).await?;
    Ok(())
}

#[tokio::test]
async fn execute_post_sends_encoded_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("POST"),
            path("/v1/projects/p1/zones/z1/clusters"),
            request::body(json_decoded(eq(json!({"name": "c1"})))),
        ])
        .respond_with(status_code(200).body("{\"name\": \"op-1\"}")),
    );
    let client = test_client(&server, ClientConfig::new());
    let command = Command::builder(
        Method::POST,
        "v1/projects/{projectId}/zones/{zone}/clusters",
    )
    .path_param("projectId", "p1")
    .path_param("zone", "z1")
    .body(&TestResource {
        name: Some("c1".into()),
        description: None,
    })
    .build()?;
    let got: TestResource = client.execute(command).await?;
    assert_eq!(got.name.as_deref(), Some("op-1"));
    Ok(())
}

#[tokio::test]
async fn execute_sends_authorization_and_user_agent() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("GET"),
            path("/v1/projects/p1/zones/-/clusters"),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::headers(contains(("user-agent", "test-app/1.0"))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = test_client(
        &server,
        ClientConfig::new()
            .set_bearer_token("test-token")
            .set_user_agent("test-app/1.0"),
    );
    let _: TestResource = client.execute(clusters_command()).await?;
    Ok(())
}

#[test_case(400, ErrorKind::Client; "bad request")]
#[test_case(401, ErrorKind::Authorization; "unauthenticated")]
#[test_case(403, ErrorKind::Authorization; "forbidden")]
#[test_case(404, ErrorKind::Client; "not found")]
#[test_case(500, ErrorKind::Server; "internal")]
#[test_case(503, ErrorKind::Server; "unavailable")]
#[tokio::test]
async fn execute_classifies_failures(code: u16, want: ErrorKind) -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(method("GET")).respond_with(
            status_code(code).body(
                json!({"error": {"code": code, "message": "simulated failure"}}).to_string(),
            ),
        ),
    );
    let client = test_client(&server, ClientConfig::new());
    let got = client
        .execute::<TestResource>(clusters_command())
        .await
        .unwrap_err();
    assert_eq!(got.kind(), want, "{got:?}");
    assert_eq!(got.retryable(), want == ErrorKind::Server, "{got:?}");
    assert_eq!(got.http_status_code(), Some(code), "{got:?}");
    assert_eq!(got.message(), Some("simulated failure"), "{got:?}");
    Ok(())
}

#[tokio::test]
async fn execute_classifies_unstructured_failures() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(method("GET"))
            .respond_with(status_code(503).body("upstream connect error")),
    );
    let client = test_client(&server, ClientConfig::new());
    let got = client
        .execute::<TestResource>(clusters_command())
        .await
        .unwrap_err();
    assert!(got.is_server(), "{got:?}");
    assert!(got.retryable(), "{got:?}");
    assert_eq!(got.http_status_code(), Some(503), "{got:?}");
    assert_eq!(got.message(), None, "{got:?}");
    assert!(
        got.to_string().contains("upstream connect error"),
        "{got}"
    );
    Ok(())
}

#[tokio::test]
async fn execute_no_content_decodes_to_default() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            method("DELETE"),
            path("/v1/projects/p1/zones/z1/clusters/c1"),
        ])
        .respond_with(status_code(204)),
    );
    let client = test_client(&server, ClientConfig::new());
    let command = Command::builder(
        Method::DELETE,
        "v1/projects/{projectId}/zones/{zone}/clusters/{clusterId}",
    )
    .path_param("projectId", "p1")
    .path_param("zone", "z1")
    .path_param("clusterId", "c1")
    .build()?;
    let got: TestResource = client.execute(command).await?;
    assert_eq!(got, TestResource::default());
    Ok(())
}

#[tokio::test]
async fn execute_malformed_payload_is_marshal_error() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(method("GET"))
            .respond_with(status_code(200).body("this is not json")),
    );
    let client = test_client(&server, ClientConfig::new());
    let got = client
        .execute::<TestResource>(clusters_command())
        .await
        .unwrap_err();
    assert!(got.is_marshal(), "{got:?}");
    Ok(())
}

#[tokio::test]
async fn execute_invalid_request_never_dispatches() {
    // No server: building the command fails before any I/O could happen.
    let got = Command::builder(
        Method::GET,
        "v1/projects/{projectId}/zones/{zone}/clusters",
    )
    .path_param("projectId", "p1")
    .build();
    let err = got.unwrap_err();
    assert!(err.is_invalid_request(), "{err:?}");
}

#[tokio::test]
async fn execute_deadline_exceeded_is_retryable() -> Result<()> {
    use tokio::io::AsyncReadExt;
    // A listener that accepts connections and then stays silent.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0_u8; 1024];
                while let Ok(n) = socket.read(&mut buf).await {
                    if n == 0 {
                        break;
                    }
                }
            });
        }
    });

    let client = Client::new(ClientConfig::new(), &format!("http://{addr}"));
    let mut options = RequestOptions::default();
    options.set_attempt_timeout(std::time::Duration::from_millis(50));
    let command = Command::builder(Method::GET, "v1/things")
        .options(options)
        .build()?;
    let got = client.execute::<TestResource>(command).await.unwrap_err();
    assert!(got.is_server(), "{got:?}");
    assert!(got.is_timeout(), "{got:?}");
    assert!(got.retryable(), "{got:?}");
    assert!(got.http_status_code().is_none(), "{got:?}");
    Ok(())
}

#[tokio::test]
async fn execute_connection_failure_is_retryable() -> Result<()> {
    // Bind a port and drop it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = Client::new(ClientConfig::new(), &format!("http://{addr}"));
    let command = Command::builder(Method::GET, "v1/things").build()?;
    let got = client.execute::<TestResource>(command).await.unwrap_err();
    assert!(got.is_server(), "{got:?}");
    assert!(got.retryable(), "{got:?}");
    Ok(())
}
