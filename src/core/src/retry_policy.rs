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

//! Defines traits for retry policies and some common implementations.
//!
//! The execution layer never retries on its own; it classifies every failure
//! and exposes [retryable][crate::error::Error::retryable]. Applications
//! that want retries drive their own loop with a policy from this module:
//!
//! ```no_run
//! # use google_apis_core::retry_policy::*;
//! # use google_apis_core::backoff_policy::*;
//! # use google_apis_core::error::Error;
//! # tokio_test::block_on(async {
//! let policy = LimitedAttemptCount::new(ServerErrorsOnly, 3);
//! let backoff = ExponentialBackoff::default();
//! let mut attempt = 0;
//! loop {
//!     attempt += 1;
//!     let error: Error = /* make the request */
//!     # Error::http(503, None, None);
//!     match policy.on_error(true, error) {
//!         RetryFlow::Continue(_) => {
//!             tokio::time::sleep(backoff.on_failure(attempt)).await;
//!         }
//!         RetryFlow::Break(_e) => break,
//!     }
//! }
//! # });
//! ```

use crate::error::Error;

/// The result of a retry policy decision.
///
/// [Continue][std::ops::ControlFlow::Continue] means the caller may attempt
/// the request again; [Break][std::ops::ControlFlow::Break] carries the
/// error to report. Both variants exist so policies compose: an inner policy
/// decides based on the error kind, a decorator may stop based on attempt
/// counts or elapsed time.
pub type RetryFlow = std::ops::ControlFlow<Error, ()>;

/// Decides whether a failed request should be attempted again.
pub trait RetryPolicy: Send + Sync {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `idempotent` - if `true`, assume the request is safe to send more
    ///   than once. Non-idempotent requests are only retried when the error
    ///   guarantees the request was never dispatched.
    /// * `error` - the last error received.
    fn on_error(&self, idempotent: bool, error: Error) -> RetryFlow;
}

/// Retries server-side and transport failures, nothing else.
///
/// Authorization and client errors never resolve by themselves, and invalid
/// requests or marshaling problems are deterministic, so only
/// [retryable][Error::retryable] errors continue — and only for idempotent
/// requests, except timeouts where the request may never have been sent.
#[derive(Clone, Debug)]
pub struct ServerErrorsOnly;

impl RetryPolicy for ServerErrorsOnly {
    fn on_error(&self, idempotent: bool, error: Error) -> RetryFlow {
        if !error.retryable() {
            return RetryFlow::Break(error);
        }
        if idempotent || error.is_timeout() {
            RetryFlow::Continue(())
        } else {
            RetryFlow::Break(error)
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// Once `maximum_attempts` errors have been observed this policy always
/// returns [Break][std::ops::ControlFlow::Break]; until then it defers to
/// the inner policy.
#[derive(Debug)]
pub struct LimitedAttemptCount<P> {
    inner: P,
    maximum_attempts: u32,
    count: std::sync::atomic::AtomicU32,
}

impl<P> LimitedAttemptCount<P> {
    pub fn new(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
            count: std::sync::atomic::AtomicU32::new(0),
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, idempotent: bool, error: Error) -> RetryFlow {
        let seen = self
            .count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            + 1;
        if seen >= self.maximum_attempts {
            return RetryFlow::Break(error);
        }
        self.inner.on_error(idempotent, error)
    }
}
