//! Durable keyed resource store with an in-memory cache front.
//!
//! Each resource lives in `<dir>/<id>.json` as pretty-printed UTF-8 JSON. A
//! cache keyed by id sits in front of the files; the durable write must
//! succeed before the cache entry is considered authoritative, so `save`
//! writes the file first and only then updates the cache.
//!
//! ## On-disk encoding
//!
//! - a string payload naming an existing regular file is stored as a typed
//!   reference: `{"content": <path>, "type": "docx_file" | "file_path"}`
//! - object and array payloads are stored as-is
//! - any other payload is wrapped as `{"content": <string form>}`
//!
//! `get` undoes the single-field `{"content": v}` wrapper; typed references
//! (two fields) are returned whole.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use super::error::ResourceError;

/// File extension used by both stores.
const STORE_EXT: &str = "json";

/// Two-tier resource store: cache in front, one JSON file per key behind.
#[derive(Debug)]
pub struct ResourceStore {
    dir: PathBuf,
    cache: Mutex<HashMap<String, Value>>,
}

impl ResourceStore {
    /// Open a store rooted at `dir`, creating the directory if absent.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, STORE_EXT))
    }

    /// Save a resource, overwriting any prior value.
    pub fn save(&self, id: &str, content: &Value) -> Result<(), ResourceError> {
        let durable = encode_payload(content);
        let text = serde_json::to_string_pretty(&durable)?;
        fs::write(self.path_for(id), text)?;
        debug!("Saved resource '{}'", id);

        self.cache_insert(id, content.clone());
        Ok(())
    }

    /// Fetch a resource: cache hit short-circuits, a miss reads the file and
    /// repopulates the cache.
    pub fn get(&self, id: &str) -> Result<Value, ResourceError> {
        if let Some(value) = self.cache_get(id) {
            debug!("Resource '{}' served from cache", id);
            return Ok(value);
        }

        let path = self.path_for(id);
        if !path.exists() {
            return Err(ResourceError::not_found(id));
        }
        let text = fs::read_to_string(&path)?;
        let data: Value = serde_json::from_str(&text)?;
        let content = unwrap_payload(data);
        self.cache_insert(id, content.clone());
        Ok(content)
    }

    /// Enumerate stored ids in directory order.
    pub fn list(&self) -> Vec<String> {
        let mut ids = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some(STORE_EXT) {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
            }
        }
        ids
    }

    /// Delete a resource. The cache entry is removed silently; a missing
    /// file reports not-found.
    pub fn delete(&self, id: &str) -> Result<(), ResourceError> {
        self.cache_remove(id);
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ResourceError::not_found(id));
        }
        fs::remove_file(path)?;
        debug!("Deleted resource '{}'", id);
        Ok(())
    }

    fn cache_get(&self, id: &str) -> Option<Value> {
        self.cache_lock().get(id).cloned()
    }

    fn cache_insert(&self, id: &str, value: Value) {
        self.cache_lock().insert(id.to_string(), value);
    }

    fn cache_remove(&self, id: &str) {
        self.cache_lock().remove(id);
    }

    fn cache_lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Build the durable on-disk representation of a payload.
fn encode_payload(content: &Value) -> Value {
    if let Value::String(s) = content {
        let path = Path::new(s);
        if path.is_file() {
            let kind = if s.ends_with(".docx") {
                "docx_file"
            } else {
                "file_path"
            };
            return json!({ "content": s, "type": kind });
        }
    }
    match content {
        Value::Object(_) | Value::Array(_) => content.clone(),
        other => json!({ "content": stringify(other) }),
    }
}

/// Undo the single-field `{"content": v}` wrapper.
fn unwrap_payload(data: Value) -> Value {
    if let Value::Object(map) = &data {
        if map.len() == 1 {
            if let Some(inner) = map.get("content") {
                return inner.clone();
            }
        }
    }
    data
}

/// The string form of a JSON value: strings verbatim, everything else as its
/// JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, ResourceStore) {
        let tmp = TempDir::new().unwrap();
        let store = ResourceStore::new(tmp.path().join("resources")).unwrap();
        (tmp, store)
    }

    #[test]
    fn test_structured_roundtrip() {
        let (_tmp, store) = test_store();
        let value = json!({ "rows": 3, "cols": 2, "tags": ["a", "b"] });
        store.save("table_info", &value).unwrap();
        assert_eq!(store.get("table_info").unwrap(), value);
    }

    #[test]
    fn test_scalar_roundtrips_through_wrapper() {
        let (_tmp, store) = test_store();
        store.save("answer", &json!(42)).unwrap();

        // the durable form is the wrapper with a stringified value
        let raw: Value = serde_json::from_str(
            &fs::read_to_string(store.dir().join("answer.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(raw, json!({ "content": "42" }));

        // a cold read unwraps it
        let cold = ResourceStore::new(store.dir()).unwrap();
        assert_eq!(cold.get("answer").unwrap(), json!("42"));
    }

    #[test]
    fn test_file_path_stored_as_typed_reference() {
        let (tmp, store) = test_store();
        let docx = tmp.path().join("report.docx");
        let txt = tmp.path().join("notes.txt");
        fs::write(&docx, b"fake").unwrap();
        fs::write(&txt, b"fake").unwrap();

        store
            .save("doc", &Value::String(docx.to_string_lossy().into_owned()))
            .unwrap();
        store
            .save("notes", &Value::String(txt.to_string_lossy().into_owned()))
            .unwrap();

        let cold = ResourceStore::new(store.dir()).unwrap();
        let doc = cold.get("doc").unwrap();
        assert_eq!(doc["type"], "docx_file");
        let notes = cold.get("notes").unwrap();
        assert_eq!(notes["type"], "file_path");
    }

    #[test]
    fn test_plain_string_is_wrapped_not_typed() {
        let (_tmp, store) = test_store();
        store.save("greeting", &json!("hello there")).unwrap();
        let raw: Value = serde_json::from_str(
            &fs::read_to_string(store.dir().join("greeting.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(raw, json!({ "content": "hello there" }));
        assert_eq!(store.get("greeting").unwrap(), json!("hello there"));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_tmp, store) = test_store();
        assert!(matches!(
            store.get("absent"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_cache_hit_survives_file_removal() {
        let (_tmp, store) = test_store();
        store.save("kept", &json!({ "a": 1 })).unwrap();
        fs::remove_file(store.dir().join("kept.json")).unwrap();
        // still served from the cache
        assert_eq!(store.get("kept").unwrap(), json!({ "a": 1 }));
    }

    #[test]
    fn test_get_repopulates_cache() {
        let (_tmp, store) = test_store();
        store.save("warm", &json!({ "x": true })).unwrap();

        let cold = ResourceStore::new(store.dir()).unwrap();
        cold.get("warm").unwrap();
        fs::remove_file(cold.dir().join("warm.json")).unwrap();
        assert_eq!(cold.get("warm").unwrap(), json!({ "x": true }));
    }

    #[test]
    fn test_list_contains_each_id_once() {
        let (_tmp, store) = test_store();
        store.save("a", &json!(1)).unwrap();
        store.save("a", &json!(2)).unwrap();
        store.save("b", &json!(3)).unwrap();

        let mut ids = store.list();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_delete_is_idempotent_on_not_found() {
        let (_tmp, store) = test_store();
        store.save("gone", &json!("bye")).unwrap();
        store.delete("gone").unwrap();
        assert!(matches!(
            store.delete("gone"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(matches!(
            store.get("gone"),
            Err(ResourceError::NotFound(_))
        ));
    }
}
