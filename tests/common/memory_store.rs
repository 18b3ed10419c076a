//! In-memory transport for integration tests: a map behind a mutex, plus
//! one-shot failure injection so tests can simulate store-side rejections.

use kvfault::cause::ServiceFailure;
use kvfault::table::{ItemKey, KvTransport};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, serde_json::Value>>,
    fail_next: Mutex<Option<ServiceFailure>>,
}

impl MemoryStore {
    /// Make the next operation fail with `failure` instead of touching the map.
    pub fn fail_next(&self, failure: ServiceFailure) {
        *self.fail_next.lock().unwrap() = Some(failure);
    }

    fn take_injected(&self) -> Option<ServiceFailure> {
        self.fail_next.lock().unwrap().take()
    }

    fn slot(pk: &str, sk: Option<&str>) -> String {
        format!("{}|{}", pk, sk.unwrap_or(""))
    }
}

impl KvTransport for MemoryStore {
    async fn get(
        &self,
        _table: &str,
        key: &ItemKey,
    ) -> Result<Option<serde_json::Value>, ServiceFailure> {
        if let Some(failure) = self.take_injected() {
            return Err(failure);
        }
        let slot = Self::slot(&key.pk, key.sk.as_deref());
        Ok(self.items.lock().unwrap().get(&slot).cloned())
    }

    async fn put(
        &self,
        _table: &str,
        item: serde_json::Value,
    ) -> Result<(), ServiceFailure> {
        if let Some(failure) = self.take_injected() {
            return Err(failure);
        }
        let pk = item
            .get("pk")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let sk = item.get("sk").and_then(serde_json::Value::as_str);
        let slot = Self::slot(&pk, sk);
        self.items.lock().unwrap().insert(slot, item);
        Ok(())
    }
}
