//! InMemoryRecordStore - HashMap-backed record store for testing and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{RecordError, RecordStore};

/// In-memory record store holding one ordered document per collection.
///
/// Clone-friendly via Arc; clones share storage.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    documents: Arc<RwLock<HashMap<String, Vec<Value>>>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load_document(&self, collection: &str) -> Result<Vec<Value>, RecordError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| RecordError::Storage("lock poisoned".into()))?;

        Ok(documents.get(collection).cloned().unwrap_or_default())
    }

    fn save_document(&self, collection: &str, elements: &[Value]) -> Result<(), RecordError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| RecordError::Storage("lock poisoned".into()))?;

        documents.insert(collection.to_string(), elements.to_vec());
        Ok(())
    }
}
