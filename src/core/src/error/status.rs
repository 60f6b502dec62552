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

use serde::{Deserialize, Serialize};

/// The structured error body returned by Google API services.
///
/// Error responses wrap this payload in an `error` envelope:
///
/// ```json
/// {"error": {"code": 404, "message": "zone not found", "errors": [...]}}
/// ```
///
/// Not every failure carries this payload. Errors generated by proxies or
/// load balancers may have a plain text body, or none at all; the client
/// libraries classify those from the HTTP status code alone.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The numeric error code, usually matching the HTTP status code.
    pub code: i32,

    /// A developer-facing error message, in English.
    pub message: String,

    /// The canonical status name, e.g. `NOT_FOUND`, when the service
    /// provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Individual errors that caused the request to fail.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [status][Status::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value for [errors][Status::errors].
    pub fn set_errors<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<ErrorDetail>,
    {
        self.errors = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// One entry in [Status::errors].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    /// The scope of the error, e.g. `global` or `usageLimits`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// A short machine-readable reason, e.g. `notFound`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// A description of this individual error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The location of the offending request element, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// What kind of location [location][ErrorDetail::location] refers to,
    /// e.g. `parameter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
}

impl ErrorDetail {
    /// Sets the value for [domain][ErrorDetail::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value for [reason][ErrorDetail::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    /// Sets the value for [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value for [location][ErrorDetail::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value for [location_type][ErrorDetail::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Envelope {
    error: Option<Status>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Unexpected;

    fn try_from(value: &bytes::Bytes) -> std::result::Result<Self, Self::Error> {
        let envelope =
            serde_json::from_slice::<Envelope>(value).map_err(|e| Unexpected(e.to_string()))?;
        envelope
            .error
            .ok_or_else(|| Unexpected("missing `error` field in error payload".into()))
    }
}

/// The error payload did not have the expected structure.
#[derive(Debug, thiserror::Error)]
#[error("unexpected error payload: {0}")]
pub struct Unexpected(String);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn deserialize_full() -> TestResult {
        let payload = bytes::Bytes::from_owner(
            json!({"error": {
                "code": 404,
                "message": "zone not found",
                "status": "NOT_FOUND",
                "errors": [{
                    "domain": "global",
                    "reason": "notFound",
                    "message": "zone not found",
                    "location": "zone",
                    "locationType": "parameter"
                }]
            }})
            .to_string(),
        );
        let got = Status::try_from(&payload)?;
        let want = Status::default()
            .set_code(404)
            .set_message("zone not found")
            .set_status("NOT_FOUND")
            .set_errors([ErrorDetail::default()
                .set_domain("global")
                .set_reason("notFound")
                .set_message("zone not found")
                .set_location("zone")
                .set_location_type("parameter")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_ignores_unknown_fields() -> TestResult {
        let payload = bytes::Bytes::from_owner(
            json!({"error": {
                "code": 503,
                "message": "try again",
                "futureField": {"a": 1}
            }})
            .to_string(),
        );
        let got = Status::try_from(&payload)?;
        assert_eq!(got.code, 503);
        assert_eq!(got.message, "try again");
        assert_eq!(got.status, None);
        Ok(())
    }

    #[test]
    fn deserialize_missing_envelope() {
        let payload = bytes::Bytes::from_static(b"{\"code\": 404}");
        let got = Status::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn deserialize_not_json() {
        let payload = bytes::Bytes::from_static(b"stream timeout");
        let got = Status::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn roundtrip() -> TestResult {
        let status = Status::default()
            .set_code(403)
            .set_message("permission denied")
            .set_errors([ErrorDetail::default()
                .set_domain("global")
                .set_reason("forbidden")]);
        let text = serde_json::to_string(&status)?;
        let got = serde_json::from_str::<Status>(&text)?;
        assert_eq!(got, status);
        Ok(())
    }
}
