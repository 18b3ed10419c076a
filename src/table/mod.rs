//! Table client plumbing: typed get/put against a transport seam.
//!
//! The transport owns the wire protocol and is injected; this layer binds a
//! table name, runs typed operations, and routes every failure through the
//! reporter so callers always see a `ClassifiedError`.

mod key;

pub use key::ItemKey;

use crate::cause::{RawCause, ServiceFailure};
use crate::classifier::KvFailureClassifier;
use crate::config::TableConfig;
use crate::error::{ClassifiedError, FailureContext};
use crate::reporter::FailureReporter;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Seam to the actual store client. Implementations own transport, signing,
/// and wire serialization; failures surface as `ServiceFailure` so the retry
/// policy can read status and name.
pub trait KvTransport {
    /// Fetch the item stored under `key`, or `None` when absent.
    fn get(
        &self,
        table: &str,
        key: &ItemKey,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, ServiceFailure>> + Send;

    /// Store `item` (key attributes included in the value).
    fn put(
        &self,
        table: &str,
        item: serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), ServiceFailure>> + Send;
}

/// Typed table client bound to one table name and one transport.
#[derive(Debug)]
pub struct KvTable<T> {
    name: String,
    transport: T,
    reporter: FailureReporter<KvFailureClassifier>,
}

impl<T: KvTransport> KvTable<T> {
    /// Bind a table name and transport.
    ///
    /// An empty table name escalates `MissingTableNameError` immediately,
    /// before any operation is attempted.
    pub fn new(cfg: &TableConfig, transport: T) -> Result<Self, ClassifiedError> {
        let classifier = KvFailureClassifier::new(cfg.retry().backoff());
        let reporter = FailureReporter::new(classifier);

        if cfg.table.is_empty() {
            return reporter.escalate(
                "MissingTableNameError",
                RawCause::text("table name not configured"),
                FailureContext::new(),
            );
        }

        Ok(Self {
            name: cfg.table.clone(),
            transport,
            reporter,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reporter bound to this table, for call sites that escalate
    /// failures of their own or need policy decisions (backoff delays).
    pub fn reporter(&self) -> &FailureReporter<KvFailureClassifier> {
        &self.reporter
    }

    /// Fetch one item. An absent item is `Ok(None)`, not a failure.
    pub async fn get<V: DeserializeOwned>(
        &self,
        key: &ItemKey,
        context: FailureContext,
    ) -> Result<Option<V>, ClassifiedError> {
        let raw = match self.transport.get(&self.name, key).await {
            Ok(raw) => raw,
            Err(failure) => {
                return self
                    .reporter
                    .escalate("FailedGetItemError", RawCause::Service(failure), context)
            }
        };

        match raw {
            None => Ok(None),
            Some(value) => match serde_json::from_value(value) {
                Ok(item) => Ok(Some(item)),
                Err(e) => self
                    .reporter
                    .escalate("FailedGetItemError", RawCause::error(e), context),
            },
        }
    }

    /// Write one item. The value must carry its own key attributes.
    pub async fn put<V: Serialize>(
        &self,
        item: &V,
        context: FailureContext,
    ) -> Result<(), ClassifiedError> {
        let value = match serde_json::to_value(item) {
            Ok(v) => v,
            Err(e) => {
                return self
                    .reporter
                    .escalate("FailedPutItemError", RawCause::error(e), context)
            }
        };

        match self.transport.put(&self.name, value).await {
            Ok(()) => Ok(()),
            Err(failure) => self
                .reporter
                .escalate("FailedPutItemError", RawCause::Service(failure), context),
        }
    }
}
