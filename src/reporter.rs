//! Classify, log, propagate: the single escalation path for call sites.

use crate::cause::RawCause;
use crate::classifier::FailureClassifier;
use crate::error::{ClassifiedError, FailureContext};

/// Orchestrates the classifier pair so every fallible operation fails through
/// one uniform path: decide retryability, wrap, log once, hand back on the
/// error channel. Performs no retries itself; the outer loop consumes the
/// `retryable` flag.
#[derive(Debug, Clone)]
pub struct FailureReporter<C> {
    classifier: C,
}

impl<C: FailureClassifier> FailureReporter<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Direct access for callers that want policy decisions without
    /// propagating (e.g. the outer retry loop asking for a backoff delay).
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify a raw cause without logging or propagating it.
    pub fn classify(
        &self,
        kind: &str,
        cause: RawCause,
        context: FailureContext,
    ) -> ClassifiedError {
        let retryable = self.classifier.is_retryable(&cause);
        self.classifier.create(kind, cause, context, retryable)
    }

    /// Classify, log exactly once, and return the failure as the error
    /// channel value. Always `Err`; callers write
    /// `return reporter.escalate(..)`.
    pub fn escalate<T>(
        &self,
        kind: &str,
        cause: RawCause,
        context: FailureContext,
    ) -> Result<T, ClassifiedError> {
        let err = self.classify(kind, cause, context);
        err.log();
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::ServiceFailure;
    use crate::classifier::KvFailureClassifier;

    fn reporter() -> FailureReporter<KvFailureClassifier> {
        FailureReporter::new(KvFailureClassifier::default())
    }

    #[test]
    fn escalate_always_returns_err() {
        let result: Result<(), ClassifiedError> = reporter().escalate(
            "FailedGetItemError",
            RawCause::text("gone"),
            FailureContext::new(),
        );
        let err = result.unwrap_err();
        assert_eq!(err.kind(), "FailedGetItemError");
        assert_eq!(err.message(), "gone");
        assert!(!err.retryable());
    }

    #[test]
    fn escalate_applies_the_policy_verdict() {
        let result: Result<(), ClassifiedError> = reporter().escalate(
            "FailedPutItemError",
            RawCause::from(ServiceFailure::new("ThrottlingException", 400)),
            FailureContext::new(),
        );
        assert!(result.unwrap_err().retryable());
    }

    #[test]
    fn context_travels_intact() {
        let context = FailureContext::from([
            ("tenantId".to_owned(), "12345".to_owned()),
            ("messageId".to_owned(), "12345".to_owned()),
        ]);
        let err = reporter().classify("FailedWriteError", RawCause::text("foo"), context.clone());
        assert_eq!(err.context(), &context);
    }
}
