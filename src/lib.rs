//! Failure classification and retry-policy decisions for remote key/value
//! store clients.
//!
//! A storage operation fails, the raw cause enters the reporter, the retry
//! policy decides retryability, the classifier wraps cause and context into a
//! [`error::ClassifiedError`], and the reporter logs it once and hands it back
//! on the error channel. The outer retry loop is an external collaborator
//! that consumes the `retryable` flag and `delay_before_retry`.

pub mod cause;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod retry;
pub mod table;
