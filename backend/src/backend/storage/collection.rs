//! JSON array collections stored under a single key.
//!
//! Every write serializes and replaces the whole collection.

use anyhow::{Context, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;

/// Load the stored array as untyped JSON values.
///
/// An absent key, an unreadable store, or a value that is not a JSON array
/// all read as an empty collection.
pub fn load_raw(store: &dyn KeyValueStore, key: &str) -> Vec<serde_json::Value> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read collection '{}': {}. Treating as empty.", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("Collection '{}' is not a JSON array: {}. Treating as empty.", key, e);
            Vec::new()
        }
    }
}

/// Load every record stored under `key` that parses as `T`.
///
/// Records that fail to parse are skipped with a warning here, but they
/// stay in storage: writes go through `append_record` / `remove_records`,
/// which operate on the raw values.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let values = load_raw(store, key);
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Failed to parse record in '{}': {}. Skipping.", key, e);
                continue;
            }
        }
    }
    records
}

/// The `id` of a raw record, accepting ids stored as numbers or numeric text
pub fn raw_id(value: &serde_json::Value) -> Option<i64> {
    match value.get("id")? {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Largest id in the stored collection, unparseable records included
pub fn max_raw_id(values: &[serde_json::Value]) -> Option<i64> {
    values.iter().filter_map(raw_id).max()
}

/// A string field of a raw record, if present
pub fn raw_str<'a>(value: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    value.get(field)?.as_str()
}

/// Append `record` to the stored array, keeping every existing entry as is
pub fn append_record<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    values: &mut Vec<serde_json::Value>,
    record: &T,
) -> Result<()> {
    let value = serde_json::to_value(record)
        .with_context(|| format!("Failed to serialize record for '{}'", key))?;
    values.push(value);
    save_collection(store, key, values)
}

/// Remove entries matching `predicate`; storage is only rewritten when
/// something was removed. Returns the number removed.
pub fn remove_records<F>(store: &dyn KeyValueStore, key: &str, predicate: F) -> Result<usize>
where
    F: Fn(&serde_json::Value) -> bool,
{
    let mut values = load_raw(store, key);
    let before = values.len();
    values.retain(|value| !predicate(value));

    let removed = before - values.len();
    if removed > 0 {
        save_collection(store, key, &values)?;
    }
    Ok(removed)
}

/// Serialize `records` and replace the value stored under `key`.
pub fn save_collection<T: Serialize>(store: &dyn KeyValueStore, key: &str, records: &[T]) -> Result<()> {
    let json = serde_json::to_string(records)
        .with_context(|| format!("Failed to serialize collection '{}'", key))?;
    store
        .set(key, &json)
        .with_context(|| format!("Failed to persist collection '{}'", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_absent_and_corrupt_read_empty() {
        let store = MemoryStore::new();
        assert!(load_collection::<Item>(&store, "items").is_empty());

        store.set("items", "{not json").unwrap();
        assert!(load_collection::<Item>(&store, "items").is_empty());

        store.set("items", "{\"id\": 1}").unwrap();
        assert!(load_collection::<Item>(&store, "items").is_empty());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let store = MemoryStore::new();
        store
            .set("items", r#"[{"id": 1, "name": "a"}, {"id": "x"}, {"id": 3, "name": "c"}]"#)
            .unwrap();

        let items: Vec<Item> = load_collection(&store, "items");
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_save_preserves_order() {
        let store = MemoryStore::new();
        let items = vec![
            Item { id: 2, name: "b".to_string() },
            Item { id: 1, name: "a".to_string() },
        ];
        save_collection(&store, "items", &items).unwrap();
        assert_eq!(load_collection::<Item>(&store, "items"), items);
    }

    #[test]
    fn test_append_keeps_unparseable_entries() {
        let store = MemoryStore::new();
        store
            .set("items", r#"[{"id": 1, "name": "a"}, {"id": "7", "label": "legacy"}]"#)
            .unwrap();

        let mut values = load_raw(&store, "items");
        assert_eq!(max_raw_id(&values), Some(7));
        append_record(&store, "items", &mut values, &Item { id: 8, name: "b".to_string() }).unwrap();

        let stored: Vec<serde_json::Value> = serde_json::from_str(&store.get("items").unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[1]["label"], "legacy");
        assert_eq!(stored[2]["name"], "b");
    }

    #[test]
    fn test_remove_records_only_rewrites_on_match() {
        let store = MemoryStore::new();
        let original = r#"[{"id": 1, "name": "a"},   {"id": "2", "broken": true}]"#;
        store.set("items", original).unwrap();

        assert_eq!(remove_records(&store, "items", |v| raw_id(v) == Some(99)).unwrap(), 0);
        assert_eq!(store.get("items").unwrap().as_deref(), Some(original));

        assert_eq!(remove_records(&store, "items", |v| raw_id(v) == Some(1)).unwrap(), 1);
        let stored: Vec<serde_json::Value> = serde_json::from_str(&store.get("items").unwrap().unwrap()).unwrap();
        assert_eq!(stored, vec![serde_json::json!({"id": "2", "broken": true})]);
    }
}
