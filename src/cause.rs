//! Raw failure values entering the classification layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A failure reported by the remote key/value store itself.
///
/// Carries the numeric status of the response and the service's
/// classification name (e.g. "ThrottlingException"); those two fields drive
/// retry decisions.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{name} (status {status})")]
pub struct ServiceFailure {
    /// Service-assigned classification name.
    pub name: String,
    /// Status code of the response that carried the failure.
    pub status: u16,
    /// Human-readable message, when the service provided one.
    pub message: Option<String>,
    /// Server-side trace or request diagnostic, when present.
    pub trace: Option<String>,
}

impl ServiceFailure {
    pub fn new(name: impl Into<String>, status: u16) -> Self {
        Self {
            name: name.into(),
            status,
            message: None,
            trace: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

/// The raw, untyped failure value entering the layer.
///
/// Failures may originate from any layer, so the shape is open: a recognized
/// storage-layer failure, a boxed error, an arbitrary structured value, or
/// plain text.
#[derive(Debug)]
pub enum RawCause {
    /// Recognized storage-layer failure.
    Service(ServiceFailure),
    /// Boxed error from any other layer.
    Error(Box<dyn std::error::Error + Send + Sync>),
    /// Arbitrary structured value.
    Value(serde_json::Value),
    /// Plain text; also the landing spot when serialization fails.
    Text(String),
}

impl RawCause {
    pub fn error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        RawCause::Error(Box::new(e))
    }

    /// Wrap an arbitrary serializable value. When serialization itself fails
    /// (erroring `Serialize` impl, unsupported map keys), degrades to the
    /// debug rendering instead of failing.
    pub fn value<T: Serialize + fmt::Debug>(v: T) -> Self {
        match serde_json::to_value(&v) {
            Ok(val) => RawCause::Value(val),
            Err(_) => RawCause::Text(format!("{v:?}")),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        RawCause::Text(s.into())
    }

    /// The storage-layer failure, when this cause is one.
    pub fn as_service(&self) -> Option<&ServiceFailure> {
        match self {
            RawCause::Service(f) => Some(f),
            _ => None,
        }
    }
}

impl From<ServiceFailure> for RawCause {
    fn from(f: ServiceFailure) -> Self {
        RawCause::Service(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn value_wraps_serializable() {
        let cause = RawCause::value(serde_json::json!({"message": "boom"}));
        assert!(matches!(cause, RawCause::Value(_)));
    }

    #[test]
    fn value_falls_back_to_debug_when_serialization_fails() {
        #[derive(Debug)]
        struct Unserializable;

        impl Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("refuses to serialize"))
            }
        }

        match RawCause::value(Unserializable) {
            RawCause::Text(s) => assert_eq!(s, "Unserializable"),
            other => panic!("expected text fallback, got {other:?}"),
        }
    }

    #[test]
    fn as_service_only_matches_service_failures() {
        let svc = RawCause::from(ServiceFailure::new("ThrottlingException", 400));
        assert_eq!(svc.as_service().unwrap().status, 400);
        assert!(RawCause::text("nope").as_service().is_none());
    }
}
