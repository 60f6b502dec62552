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

//! Resolution of `{name}` placeholders in request path templates.
//!
//! Generated methods carry their request path as a template, e.g.
//! `v1/projects/{projectId}/zones/{zone}/clusters`. Expansion substitutes
//! each placeholder with the caller-supplied value, percent-encoding the
//! value so it stays within its path segment. A template with a placeholder
//! that has no matching parameter cannot be sent; that is an error at
//! construction time, not at network time.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The characters escaped in an expanded path segment.
///
/// This matches the path-segment rules of RFC 3986: everything outside the
/// unreserved and sub-delim sets is escaped, as is `/` so a value cannot
/// span segments. `-` is unreserved and passes through, which keeps the
/// `-` wildcard (e.g. "all zones") intact.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Expands `template` by substituting each `{name}` placeholder with the
/// matching value from `params`.
///
/// Expansion is pure: the same inputs always produce the same path, and
/// literal segments are copied unchanged.
///
/// # Example
/// ```
/// # use google_apis_core::path_template::expand;
/// let path = expand(
///     "v1/projects/{projectId}/zones/{zone}/clusters",
///     &[("projectId", "p1"), ("zone", "-")],
/// ).unwrap();
/// assert_eq!(path, "v1/projects/p1/zones/-/clusters");
/// ```
pub fn expand(template: &str, params: &[(&str, &str)]) -> crate::Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut remains = template;
    loop {
        match (remains.find('{'), remains.find('}')) {
            (None, None) => {
                path.push_str(remains);
                return Ok(path);
            }
            (Some(open), Some(close)) if open < close => {
                path.push_str(&remains[..open]);
                let name = &remains[open + 1..close];
                let value = params
                    .iter()
                    .find_map(|(k, v)| (*k == name).then_some(*v))
                    .ok_or_else(|| missing(name))?;
                path.extend(utf8_percent_encode(value, SEGMENT));
                remains = &remains[close + 1..];
            }
            _ => {
                return Err(crate::error::Error::invalid_request(
                    Error::Malformed(template.to_string()),
                ));
            }
        }
    }
}

/// Creates the error for a placeholder with no matching parameter.
///
/// Generated builders also use this directly for parameters they validate
/// before building a command.
pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::invalid_request(Error::MissingParameter(name.to_string()))
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingParameter(String),
    #[error("mismatched braces in path template {0}")]
    Malformed(String),
}
