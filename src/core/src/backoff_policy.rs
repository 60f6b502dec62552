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

//! Defines traits for backoff policies and a common implementation.
//!
//! Backoff policies space out caller-side retry attempts. See
//! [retry_policy][crate::retry_policy] for the loop they plug into.

use std::time::Duration;

/// Computes how long to wait before the next attempt.
pub trait BackoffPolicy: Send + Sync {
    /// The delay before attempt `attempt_count + 1`. The first failure is
    /// reported as `attempt_count == 1`.
    fn on_failure(&self, attempt_count: u32) -> Duration;
}

/// Truncated exponential backoff with full jitter.
///
/// The delay for attempt `n` is drawn uniformly from
/// `(0, initial_delay * scaling^(n-1)]`, clamped to `maximum_delay`.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    pub fn new(initial_delay: Duration, maximum_delay: Duration, scaling: f64) -> Self {
        Self {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }
}

impl BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, attempt_count: u32) -> Duration {
        use rand::Rng;
        let exponent = attempt_count.saturating_sub(1).min(63) as i32;
        let ceiling = self.initial_delay.as_secs_f64() * self.scaling.powi(exponent);
        let ceiling = ceiling.min(self.maximum_delay.as_secs_f64());
        rand::rng().random_range(Duration::ZERO..=Duration::from_secs_f64(ceiling))
    }
}
