//! Composite item key schema: primary pair plus optional secondary-index pairs.

use serde::{Deserialize, Serialize};

/// Key attributes for one item. `pk` is required; the sort key and the three
/// secondary-index pairs are optional and omitted from serialized items when
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemKey {
    pub pk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi1pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi1sk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi2pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi2sk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi3pk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsi3sk: Option<String>,
}

impl ItemKey {
    /// Key with only a partition component.
    pub fn partition(pk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            ..Self::default()
        }
    }

    /// Key with partition and sort components.
    pub fn primary(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: Some(sk.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_index_pairs_are_omitted_when_serialized() {
        let key = ItemKey::primary("tenant/msg", "tenant/msg");
        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"pk": "tenant/msg", "sk": "tenant/msg"})
        );
    }

    #[test]
    fn partition_only_key() {
        let key = ItemKey::partition("tenant");
        assert_eq!(key.pk, "tenant");
        assert!(key.sk.is_none());
    }
}
