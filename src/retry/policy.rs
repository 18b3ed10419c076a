//! Backoff policy: how long to wait before the next attempt.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Growth curve for backoff delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffCurve {
    /// Same delay for every attempt.
    #[default]
    Constant,
    /// base * attempt.
    Linear,
    /// base * 2^(attempt-1), capped.
    Exponential,
}

/// Pure backoff decider.
///
/// Only computes a duration; actually waiting is the caller's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    /// Growth curve applied to the base delay.
    pub curve: BackoffCurve,
    /// Upper bound on any computed delay.
    pub max_delay: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            curve: BackoffCurve::Constant,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl Backoff {
    /// Compute the wait before the next attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Deterministic in
    /// `(base, attempt)`, never negative, never above `max_delay`, and
    /// non-decreasing in `attempt` for every curve.
    pub fn delay_before_retry(&self, base: Duration, attempt: u32) -> Duration {
        let raw = match self.curve {
            BackoffCurve::Constant => base,
            BackoffCurve::Linear => base.saturating_mul(attempt.max(1)),
            BackoffCurve::Exponential => {
                let exp = 1u32 << attempt.saturating_sub(1).min(16);
                base.saturating_mul(exp)
            }
        };
        raw.min(self.max_delay)
    }
}
