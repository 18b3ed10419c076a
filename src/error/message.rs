//! Best-effort message and origin-trace extraction from raw causes.

use crate::cause::RawCause;
use serde::Serialize;
use std::fmt;

/// Extract a human message from a cause.
///
/// Precedence: an explicit message field on the cause, then textual
/// serialization, then a debug rendering. Never fails; error reporting must
/// not itself crash the reporting path.
pub(crate) fn extract_message(cause: &RawCause) -> String {
    match cause {
        RawCause::Service(f) => match &f.message {
            Some(m) => m.clone(),
            None => serialize_or_debug(f),
        },
        RawCause::Error(e) => e.to_string(),
        RawCause::Value(v) => match v.get("message").and_then(serde_json::Value::as_str) {
            Some(m) => m.to_owned(),
            None => serialize_or_debug(v),
        },
        RawCause::Text(s) => s.clone(),
    }
}

fn serialize_or_debug<T: Serialize + fmt::Debug>(v: &T) -> String {
    serde_json::to_string(v).unwrap_or_else(|_| format!("{v:?}"))
}

/// Extract the cause's origin trace, when it exposes one: the server-side
/// trace for storage failures, the rendered source chain for boxed errors.
pub(crate) fn extract_trace(cause: &RawCause) -> Option<String> {
    match cause {
        RawCause::Service(f) => f.trace.clone(),
        RawCause::Error(e) => {
            let mut parts = Vec::new();
            let mut source = e.source();
            while let Some(s) = source {
                parts.push(s.to_string());
                source = s.source();
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(": "))
            }
        }
        RawCause::Value(_) | RawCause::Text(_) => None,
    }
}
