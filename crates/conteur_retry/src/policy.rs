//! Retry budget and backoff schedule.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many times a call is attempted and how long to wait in between.
///
/// The wait before attempt `n + 1` is `backoff_base * n`, so delays grow
/// linearly with the attempt index.
///
/// # Examples
///
/// ```
/// use conteur_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3, Duration::from_millis(1000));
/// let delays: Vec<Duration> = policy.delays().collect();
/// assert_eq!(delays, vec![Duration::from_millis(1000), Duration::from_millis(2000)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Total number of attempts, first call included.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,

    /// Base unit of the linear backoff, in milliseconds.
    #[serde(default = "default_backoff_base_ms")]
    backoff_base_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy. A budget of zero attempts is raised to one.
    pub fn new(max_attempts: u32, backoff_base: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base_ms: backoff_base.as_millis() as u64,
        }
    }

    /// Policy that calls once and never waits.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Base unit of the linear backoff.
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Number of attempts actually made, never below one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Wait before the attempt following attempt `attempt` (one-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_base() * attempt
    }

    /// Waits between consecutive attempts, `attempts() - 1` items.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let base = self.backoff_base();
        (1..self.attempts()).map(move |n| base * n)
    }
}
