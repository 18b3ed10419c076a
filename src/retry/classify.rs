//! Retryability classification for raw causes.

use crate::cause::RawCause;

/// Failure names safe to retry when the store rejects a request with a
/// client-side (400) status. All of them are capacity or throttling
/// conditions that clear on their own. Static; never mutated at runtime.
pub const RETRYABLE_KINDS: &[&str] = &[
    "ItemCollectionSizeLimitExceededException",
    "LimitExceededException",
    "ProvisionedThroughputExceeded",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "ThrottlingException",
    "UnrecognizedClientException",
];

/// Decide whether a cause is safe to retry.
///
/// Only causes recognized as storage-layer failures are ever retried: 500 and
/// 503 always (server-side or capacity problem), 400 only when the failure
/// name is in `kinds`. Any other status, and any cause of unknown shape,
/// yields false. Unknown failures are never retried automatically.
pub fn is_retryable(cause: &RawCause, kinds: &[&str]) -> bool {
    let Some(failure) = cause.as_service() else {
        return false;
    };
    match failure.status {
        500 | 503 => true,
        400 => kinds.contains(&failure.name.as_str()),
        _ => false,
    }
}
