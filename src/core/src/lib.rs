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

//! Google APIs client core.
//!
//! This crate contains the command construction and execution layer shared by
//! the generated Google API client libraries for Rust. Each generated method
//! builds a [Command][crate::command::Command] from a path template and its
//! parameters, and hands it to a [Client][crate::client::Client] for immediate
//! execution, or to a [Batch][crate::batch::Batch] for joint dispatch.
//!
//! Applications rarely use these types directly; they interact with the
//! generated clients and their per-RPC builders.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Joint dispatch of multiple commands with independent outcomes.
pub mod batch;

/// The executor: dispatches commands and classifies their outcomes.
pub mod client;

/// Builders for service clients.
pub mod client_builder;

/// One logical API request plus its marshaling metadata.
pub mod command;

/// The core error types used by generated clients.
pub mod error;

/// Client configuration and per-request options.
pub mod options;

/// Resolution of `{name}` placeholders in request path templates.
pub mod path_template;

/// Caller-side retry policies. The executor itself never retries.
pub mod retry_policy;

/// Caller-side backoff policies, used together with [retry_policy].
pub mod backoff_policy;
