//! API Response types
//!
//! Write endpoints answer with a small acknowledgment instead of the
//! affected document; list endpoints answer with a [`Page`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Acknowledgment of a single insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertAck {
    /// Natural key of the inserted document
    pub inserted_id: String,
}

/// Acknowledgment of an order created together with its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertManyAck {
    pub order_id: String,
    pub inserted_ids: Vec<String>,
}

/// Acknowledgment of a sparse update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateAck {
    /// One document matched and was written
    pub fn one() -> Self {
        Self {
            matched_count: 1,
            modified_count: 1,
        }
    }
}

/// Acknowledgment of a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

/// One page of a collection listing
///
/// Serialized with an entity-specific key for the items:
///
/// ```json
/// { "total_count": 5, "food_items": [ ... ] }
/// ```
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Number of documents in the whole collection
    pub total_count: u64,
    /// Documents in this page window
    pub items: Vec<T>,
    /// JSON key the items are emitted under (e.g. `food_items`)
    pub items_key: &'static str,
}

impl<T> Page<T> {
    pub fn new(items_key: &'static str, total_count: u64, items: Vec<T>) -> Self {
        Self {
            total_count,
            items,
            items_key,
        }
    }

    /// Convert every item, keeping count and key
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_count: self.total_count,
            items: self.items.into_iter().map(f).collect(),
            items_key: self.items_key,
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("total_count", &self.total_count)?;
        map.serialize_entry(self.items_key, &self.items)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_uses_entity_key() {
        let page = Page::new("menu_items", 7, vec!["a", "b"]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total_count"], 7);
        assert_eq!(json["menu_items"], serde_json::json!(["a", "b"]));
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new("table_items", 3, vec![1, 2]).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.items_key, "table_items");
    }
}
