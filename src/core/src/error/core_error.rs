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

use super::Status;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The request may
/// be invalid before it is ever sent, the request or response payloads may
/// fail to convert to or from their wire form, or the service may reject the
/// request.
///
/// Most applications just return or log the error. Applications that need to
/// act on specific failures can interrogate the [kind][Error::kind], the
/// [retryable][Error::retryable] flag, and the HTTP status code or service
/// [Status] when present.
///
/// # Example
/// ```
/// use google_apis_core::error::Error;
/// match example_function() {
///     Err(e) if e.retryable() => { println!("worth another attempt: {e}"); },
///     Err(e) => { println!("give up: {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(503, None, None))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    http_status_code: Option<u16>,
    status: Option<Status>,
    payload: Option<bytes::Bytes>,
    timeout: bool,
    source: Option<BoxError>,
}

/// The classification of an [Error].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request could not be built, e.g. a path template placeholder had
    /// no matching parameter. Detected before any network activity.
    InvalidRequest,
    /// A request payload could not be encoded, or a response payload could
    /// not be decoded.
    Marshal,
    /// The service rejected the request's credentials (HTTP 401 or 403).
    /// Never retried automatically.
    Authorization,
    /// The request itself was invalid (any other 4xx). The caller must fix
    /// the request before trying again.
    Client,
    /// A transient server-side or transport failure (5xx, timeouts, broken
    /// connections). Safe to retry with backoff.
    Server,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidRequest => write!(f, "the request could not be built"),
            ErrorKind::Marshal => write!(f, "a payload could not be converted"),
            ErrorKind::Authorization => write!(f, "the service rejected the credentials"),
            ErrorKind::Client => write!(f, "the service rejected the request"),
            ErrorKind::Server => write!(f, "a transient service or transport problem"),
        }
    }
}

impl Error {
    fn new(kind: ErrorKind, source: Option<BoxError>) -> Self {
        Self {
            kind,
            http_status_code: None,
            status: None,
            payload: None,
            timeout: false,
            source,
        }
    }

    /// Creates an error for a request that cannot be built.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_apis_core::error::Error;
    /// let error = Error::invalid_request("missing required parameter `zone`");
    /// assert!(error.is_invalid_request());
    /// assert!(error.source().is_some());
    /// ```
    pub fn invalid_request<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::InvalidRequest, Some(source.into()))
    }

    /// Creates an error representing a request encoding problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Marshal, Some(source.into()))
    }

    /// Creates an error representing a response decoding problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Marshal, Some(source.into()))
    }

    /// Creates an error from a non-2xx HTTP response.
    ///
    /// The error kind is derived from the status code: 401 and 403 map to
    /// [ErrorKind::Authorization], any other 4xx to [ErrorKind::Client], and
    /// everything else to [ErrorKind::Server].
    ///
    /// # Example
    /// ```
    /// use google_apis_core::error::{Error, Status};
    /// let status = Status::default().set_code(503).set_message("overloaded");
    /// let error = Error::http(503, Some(status), None);
    /// assert!(error.is_server());
    /// assert!(error.retryable());
    /// assert_eq!(error.http_status_code(), Some(503));
    /// ```
    pub fn http(status_code: u16, status: Option<Status>, payload: Option<bytes::Bytes>) -> Self {
        Self {
            kind: Self::classify(status_code),
            http_status_code: Some(status_code),
            status,
            payload,
            timeout: false,
            source: None,
        }
    }

    /// Creates an error representing an expired request deadline.
    ///
    /// Deadlines are always retryable: the request may or may not have
    /// reached the service, and idempotency decides whether a caller-side
    /// policy should re-send it.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        let mut e = Self::new(ErrorKind::Server, Some(source.into()));
        e.timeout = true;
        e
    }

    /// Creates an error for a transport problem without a full HTTP
    /// response, e.g. a connection broken mid-exchange.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Server, Some(source.into()))
    }

    /// Maps an HTTP status code to an [ErrorKind].
    pub fn classify(status_code: u16) -> ErrorKind {
        match status_code {
            401 | 403 => ErrorKind::Authorization,
            400..=499 => ErrorKind::Client,
            _ => ErrorKind::Server,
        }
    }

    /// Returns the [ErrorKind] associated with this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The request could not be built and was never dispatched.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidRequest)
    }

    /// A payload could not be encoded or decoded.
    pub fn is_marshal(&self) -> bool {
        matches!(self.kind, ErrorKind::Marshal)
    }

    /// The service rejected the request's credentials.
    pub fn is_authorization(&self) -> bool {
        matches!(self.kind, ErrorKind::Authorization)
    }

    /// The request was invalid; the caller must change it before retrying.
    pub fn is_client(&self) -> bool {
        matches!(self.kind, ErrorKind::Client)
    }

    /// A transient server-side or transport failure.
    pub fn is_server(&self) -> bool {
        matches!(self.kind, ErrorKind::Server)
    }

    /// If true, a caller-side retry policy may safely re-send the request.
    ///
    /// The client libraries never retry on their own; this flag exists so a
    /// policy such as [crate::retry_policy::ServerErrorsOnly] can decide.
    pub fn retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Server)
    }

    /// The request could not complete before its deadline.
    pub fn is_timeout(&self) -> bool {
        self.timeout
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// Errors detected before dispatch (invalid requests, encoding problems)
    /// and connection-level failures have no status code.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    /// The structured [Status] payload, when the service supplied one.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// The server-supplied error message, when present.
    pub fn message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.message.as_str())
    }

    /// The raw error payload, for failures without a structured body.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.payload.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.status, &self.http_status_code, &self.source) {
            (Some(status), Some(code), _) => write!(
                f,
                "the service reports a [{code}] error: {}",
                status.message
            ),
            (None, Some(code), _) => {
                write!(f, "the HTTP transport reports a [{code}] error")?;
                if let Some(p) = self.payload.as_ref() {
                    if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                        write!(f, ": {message}")?;
                    }
                }
                Ok(())
            }
            (_, _, Some(e)) => write!(f, "{}: {e}", self.kind),
            (_, _, None) => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}
