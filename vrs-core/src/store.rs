//! The object store collaborator (§6.2): a mapping from `ga4gh:` identifiers
//! to inlined objects, used by the enref/deref engine.

use std::collections::HashMap;

/// Any mapping from `ga4gh:…` identifiers to inlined objects (stored here as
/// JSON, since the store is agnostic to which VRS entity type it holds).
///
/// Concurrent writers of the same object produce identical bytes (§5 "shared
/// resource policy"), so `put` MAY resolve collisions last-writer-wins.
pub trait ObjectStore {
    fn put(&mut self, id: String, value: serde_json::Value);
    fn get(&self, id: &str) -> Option<serde_json::Value>;
    fn iter(&self) -> Box<dyn Iterator<Item = (String, serde_json::Value)> + '_>;
}

/// A plain in-memory `HashMap`-backed object store — a conforming
/// implementation per §6.2.
#[derive(Debug, Default, Clone)]
pub struct InMemoryObjectStore {
    inner: HashMap<String, serde_json::Value>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn put(&mut self, id: String, value: serde_json::Value) {
        self.inner.insert(id, value);
    }

    fn get(&self, id: &str) -> Option<serde_json::Value> {
        self.inner.get(id).cloned()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (String, serde_json::Value)> + '_> {
        Box::new(self.inner.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}
