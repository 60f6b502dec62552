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

//! Joint dispatch of multiple commands with independent outcomes.
//!
//! A [Batch] collects commands without performing any network I/O, then
//! sends them as one `multipart/mixed` request to the service's `/batch`
//! endpoint. Every queued command owns a completion handler; on
//! [flush][Batch::flush] each handler observes its own command's typed
//! result or classified error, exactly the outcome a direct
//! [execute][crate::client::Client::execute] call would have produced.
//! One part failing does not affect its siblings.
//!
//! # Example
//! ```no_run
//! # use google_apis_core::{client::Client, command::Command, options::ClientConfig};
//! # tokio_test::block_on(async {
//! let client = Client::new(ClientConfig::new(), "https://container.googleapis.com/");
//! let mut batch = client.batch();
//! let command = Command::builder(http::Method::GET, "v1/things").build().unwrap();
//! batch.queue::<serde_json::Value, _>(command, |result| {
//!     match result {
//!         Ok(thing) => println!("got {thing:?}"),
//!         Err(e) => println!("this slot failed: {e}"),
//!     }
//! });
//! batch.flush().await;
//! # });
//! ```

use crate::Result;
use crate::client::Client;
use crate::command::Command;
use crate::error::Error;

/// An ordered set of commands sharing one physical dispatch.
///
/// Created via [Client::batch]. Dropping an unflushed batch discards its
/// slots without invoking any handler.
pub struct Batch {
    client: Client,
    slots: Vec<Slot>,
}

struct Slot {
    command: Command,
    handler: Box<dyn FnOnce(Result<PartResponse>) + Send>,
}

/// The embedded HTTP response for one slot.
pub(crate) struct PartResponse {
    pub(crate) status_code: u16,
    pub(crate) body: bytes::Bytes,
}

impl Batch {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            slots: Vec::new(),
        }
    }

    /// The number of queued commands.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no command has been queued.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `command` to the batch without performing any network I/O.
    ///
    /// `handler` fires exactly once during [flush][Batch::flush], with this
    /// command's own outcome. Commands queued from different call sites keep
    /// their slot-to-handler association regardless of interleaving.
    pub fn queue<O, F>(&mut self, command: Command, handler: F)
    where
        O: serde::de::DeserializeOwned + Default + 'static,
        F: FnOnce(Result<O>) + Send + 'static,
    {
        let handler = Box::new(move |part: Result<PartResponse>| {
            handler(part.and_then(decode_part::<O>));
        });
        self.slots.push(Slot { command, handler });
    }

    /// Performs the joint dispatch and invokes every slot handler.
    ///
    /// The commands are sent as one `multipart/mixed` POST, each part an
    /// `application/http` envelope. Responses are matched back to their slot
    /// by `Content-ID`, falling back to part order when the server omits
    /// them. If the joint dispatch itself fails, every handler observes a
    /// retryable error.
    pub async fn flush(self) {
        let Batch { client, mut slots } = self;
        if slots.is_empty() {
            return;
        }
        for slot in slots.iter_mut() {
            client.apply_default_parameters(&mut slot.command);
        }
        let boundary = format!("batch_{}", uuid::Uuid::new_v4());
        let payload = build_payload(&slots, &boundary);
        tracing::debug!(parts = slots.len(), "dispatching batch");

        let mut builder = client
            .http()
            .post(format!("{}/batch", client.endpoint()))
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/mixed; boundary={boundary}"),
            )
            .body(payload);
        if let Some(user_agent) = client.default_user_agent() {
            builder = builder.header(reqwest::header::USER_AGENT, user_agent);
        }
        if let Some(token) = client.default_bearer_token() {
            builder = builder.bearer_auth(token);
        }

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                let timed_out = e.is_timeout();
                let message = format!("batch dispatch failed: {e}");
                return Self::fail_all(slots, move |m| {
                    if timed_out {
                        Error::timeout(m)
                    } else {
                        Error::io(m)
                    }
                }, message);
            }
        };
        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                let message = format!("batch dispatch failed: {e}");
                return Self::fail_all(slots, Error::io, message);
            }
        };
        if !(200..300).contains(&status_code) {
            tracing::warn!(status_code, "batch request failed");
            for slot in slots {
                (slot.handler)(Err(Client::classify_response(status_code, body.clone())));
            }
            return;
        }
        let Some(reply_boundary) = boundary_from_content_type(&content_type) else {
            let message = format!("batch response is not multipart/mixed: {content_type}");
            return Self::fail_all(slots, Error::deser, message);
        };
        let Ok(text) = std::str::from_utf8(&body) else {
            return Self::fail_all(
                slots,
                Error::deser,
                "batch response is not valid UTF-8".to_string(),
            );
        };

        let mut by_slot: Vec<Option<PartResponse>> = Vec::new();
        by_slot.resize_with(slots.len(), || None);
        for (order, part) in parse_parts(text, &reply_boundary).into_iter().enumerate() {
            let index = part
                .content_id
                .as_deref()
                .and_then(slot_index)
                .unwrap_or(order);
            if let Some(entry) = by_slot.get_mut(index) {
                entry.get_or_insert(part.response);
            }
        }
        for (slot, part) in slots.into_iter().zip(by_slot) {
            match part {
                Some(p) => (slot.handler)(Ok(p)),
                None => (slot.handler)(Err(Error::io(
                    "the batch response did not include a part for this command",
                ))),
            }
        }
    }

    fn fail_all<F>(slots: Vec<Slot>, make: F, message: String)
    where
        F: Fn(String) -> Error,
    {
        for slot in slots {
            (slot.handler)(Err(make(message.clone())));
        }
    }
}

impl std::fmt::Debug for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("endpoint", &self.client.endpoint())
            .field("slots", &self.slots.len())
            .finish()
    }
}

fn decode_part<O>(part: PartResponse) -> Result<O>
where
    O: serde::de::DeserializeOwned + Default,
{
    if !(200..300).contains(&part.status_code) {
        return Err(Client::classify_response(part.status_code, part.body));
    }
    if part.body.is_empty() && part.status_code == 204 {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&part.body).map_err(Error::deser)
}

fn build_payload(slots: &[Slot], boundary: &str) -> String {
    use std::fmt::Write as _;
    let mut payload = String::new();
    for (i, slot) in slots.iter().enumerate() {
        let command = &slot.command;
        let _ = write!(
            payload,
            "--{boundary}\r\nContent-Type: application/http\r\nContent-ID: <item{i}>\r\n\r\n"
        );
        let _ = write!(
            payload,
            "{} /{}{} HTTP/1.1\r\n",
            command.method(),
            command.path().trim_start_matches('/'),
            query_string(command)
        );
        match command.body().and_then(|b| std::str::from_utf8(b).ok()) {
            Some(body) => {
                let _ = write!(
                    payload,
                    "Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}\r\n",
                    body.len()
                );
            }
            None => payload.push_str("\r\n"),
        }
    }
    let _ = write!(payload, "--{boundary}--\r\n");
    payload
}

fn query_string(command: &Command) -> String {
    if command.query().is_empty() {
        return String::new();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in command.query() {
        serializer.append_pair(k, v);
    }
    format!("?{}", serializer.finish())
}

fn boundary_from_content_type(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|p| p.strip_prefix("boundary="))
        .map(|b| b.trim_matches('"').to_string())
}

struct Part {
    content_id: Option<String>,
    response: PartResponse,
}

fn parse_parts(text: &str, boundary: &str) -> Vec<Part> {
    let delimiter = format!("--{boundary}");
    let mut parts = Vec::new();
    for chunk in text.split(delimiter.as_str()).skip(1) {
        if chunk.starts_with("--") {
            break;
        }
        let chunk = chunk
            .strip_prefix("\r\n")
            .or_else(|| chunk.strip_prefix("\n"))
            .unwrap_or(chunk);
        if let Some(part) = parse_part(chunk) {
            parts.push(part);
        }
    }
    parts
}

fn parse_part(chunk: &str) -> Option<Part> {
    let (outer_headers, embedded) = split_once_blank_line(chunk)?;
    let content_id = outer_headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("content-id")
            .then(|| value.trim().to_string())
    });
    let (head, body) = split_once_blank_line(embedded).unwrap_or((embedded, ""));
    let status_line = head.lines().next()?;
    let status_code = status_line.split_whitespace().nth(1)?.parse::<u16>().ok()?;
    let body = body.trim_end_matches(['\r', '\n']);
    Some(Part {
        content_id,
        response: PartResponse {
            status_code,
            body: bytes::Bytes::copy_from_slice(body.as_bytes()),
        },
    })
}

fn split_once_blank_line(text: &str) -> Option<(&str, &str)> {
    if let Some(i) = text.find("\r\n\r\n") {
        return Some((&text[..i], &text[i + 4..]));
    }
    text.find("\n\n").map(|i| (&text[..i], &text[i + 2..]))
}

fn slot_index(content_id: &str) -> Option<usize> {
    let id = content_id
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>');
    let id = id.strip_prefix("response-").unwrap_or(id);
    id.strip_prefix("item")?.parse().ok()
}
