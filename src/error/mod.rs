//! Uniform classified failure representation.
//!
//! One concrete error structure regardless of origin, distinguished by its
//! `kind` string and `retryable` flag rather than by type. The retryability
//! verdict always comes from retry policy code; this module only represents
//! it.

mod message;

use crate::cause::RawCause;
use std::collections::BTreeMap;
use std::fmt;

/// Caller-supplied diagnostic key/value data attached to a failure
/// (correlation ids such as tenant id, message id). Immutable once attached.
pub type FailureContext = BTreeMap<String, String>;

/// A classified failure: kind, extracted message, original cause, diagnostic
/// context, retryability verdict, and origin trace. Immutable after
/// construction.
#[derive(Debug)]
pub struct ClassifiedError {
    kind: String,
    message: String,
    cause: RawCause,
    context: FailureContext,
    retryable: bool,
    origin_trace: Option<String>,
}

impl ClassifiedError {
    /// Build a classified error from a raw cause.
    ///
    /// Message and trace extraction degrade to fallbacks instead of failing,
    /// so construction itself cannot fail. `retryable` must be a verdict from
    /// the retry policy; it is fixed here and never recomputed.
    pub fn new(
        kind: impl Into<String>,
        cause: RawCause,
        context: FailureContext,
        retryable: bool,
    ) -> Self {
        let message = message::extract_message(&cause);
        let origin_trace = message::extract_trace(&cause);
        Self {
            kind: kind.into(),
            message,
            cause,
            context,
            retryable,
            origin_trace,
        }
    }

    /// Operation-specific identifying name, chosen by the call site.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original raw failure, kept for forensics.
    pub fn cause(&self) -> &RawCause {
        &self.cause
    }

    pub fn context(&self) -> &FailureContext {
        &self.context
    }

    /// Whether the failed operation is safe to retry. Fixed at construction.
    pub fn retryable(&self) -> bool {
        self.retryable
    }

    pub fn origin_trace(&self) -> Option<&str> {
        self.origin_trace.as_deref()
    }

    /// Emit one structured record for this error to the diagnostic sink.
    ///
    /// Safe to call any number of times: emissions are identical and no state
    /// is mutated. Never panics.
    pub fn log(&self) {
        tracing::error!(
            kind = %self.kind,
            message = %self.message,
            context = ?self.context,
            retryable = self.retryable,
            origin_trace = self.origin_trace.as_deref().unwrap_or(""),
            "storage operation failed"
        );
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ClassifiedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            RawCause::Service(f) => Some(f),
            RawCause::Error(e) => {
                let cause: &(dyn std::error::Error + 'static) = &**e;
                Some(cause)
            }
            RawCause::Value(_) | RawCause::Text(_) => None,
        }
    }
}
