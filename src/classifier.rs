//! Classifier contract: the policy-and-factory pair for one backing store.

use crate::cause::RawCause;
use crate::error::{ClassifiedError, FailureContext};
use crate::retry::{self, Backoff};
use std::time::Duration;

/// Retry policy plus error factory for one backing integration.
///
/// Call sites hold this contract, never a concrete backend, so swapping the
/// backing store swaps the pair without touching them. `create` takes the
/// retryability verdict as an argument rather than deciding it; policy and
/// representation stay decoupled.
pub trait FailureClassifier {
    /// Whether the cause is safe to retry.
    fn is_retryable(&self, cause: &RawCause) -> bool;

    /// Wait before the next attempt. Pure; `attempt` is 1-based.
    fn delay_before_retry(&self, base: Duration, attempt: u32) -> Duration;

    /// Wrap a raw cause into a classified error with a pre-computed verdict.
    fn create(
        &self,
        kind: &str,
        cause: RawCause,
        context: FailureContext,
        retryable: bool,
    ) -> ClassifiedError;
}

/// Classifier for the remote key/value store integration.
#[derive(Debug, Clone)]
pub struct KvFailureClassifier {
    retryable_kinds: &'static [&'static str],
    backoff: Backoff,
}

impl KvFailureClassifier {
    pub fn new(backoff: Backoff) -> Self {
        Self {
            retryable_kinds: retry::RETRYABLE_KINDS,
            backoff,
        }
    }
}

impl Default for KvFailureClassifier {
    fn default() -> Self {
        Self::new(Backoff::default())
    }
}

impl FailureClassifier for KvFailureClassifier {
    fn is_retryable(&self, cause: &RawCause) -> bool {
        retry::is_retryable(cause, self.retryable_kinds)
    }

    fn delay_before_retry(&self, base: Duration, attempt: u32) -> Duration {
        self.backoff.delay_before_retry(base, attempt)
    }

    fn create(
        &self,
        kind: &str,
        cause: RawCause,
        context: FailureContext,
        retryable: bool,
    ) -> ClassifiedError {
        ClassifiedError::new(kind, cause, context, retryable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::ServiceFailure;

    #[test]
    fn create_stores_the_given_verdict_without_recomputing() {
        let c = KvFailureClassifier::default();
        let cause = RawCause::from(ServiceFailure::new("ValidationException", 400));
        // ValidationException is not retryable, but create must trust its input.
        let err = c.create("FailedPutItemError", cause, FailureContext::new(), true);
        assert!(err.retryable());
    }

    #[test]
    fn classifier_delegates_to_policy() {
        let c = KvFailureClassifier::default();
        let throttled = RawCause::from(ServiceFailure::new("ThrottlingException", 400));
        assert!(c.is_retryable(&throttled));
        assert_eq!(
            c.delay_before_retry(Duration::from_millis(100), 3),
            Duration::from_millis(100)
        );
    }
}
