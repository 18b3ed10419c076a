//! Retry and backoff policy.
//!
//! This module encapsulates retryability classification (throttling, limit
//! exhaustion, server-side failures) and backoff decisions so that the outer
//! retry loop and the error layer share a consistent policy. Both decisions
//! are pure functions; waiting is the caller's responsibility.

mod classify;
mod policy;

pub use classify::{is_retryable, RETRYABLE_KINDS};
pub use policy::{Backoff, BackoffCurve};
