//! JsonFileStore - one pretty-printed JSON array document per collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::{RecordError, RecordStore};

/// Record store that keeps each collection in `<root>/<collection>.json`.
///
/// Nothing is cached: every operation reads the document from disk, and every
/// mutation rewrites it through a temporary file renamed over the original.
/// Cloning is cheap and clones refer to the same directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RecordError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the collection documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document backing `collection`.
    pub fn document_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    /// Create an empty document for `collection` unless one already exists.
    pub fn ensure_document(&self, collection: &str) -> Result<(), RecordError> {
        let path = self.document_path(collection);
        if !path.exists() {
            debug!(collection, path = %path.display(), "creating empty document");
            self.save_document(collection, &[])?;
        }
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_document(&self, collection: &str) -> Result<Vec<Value>, RecordError> {
        self.ensure_document(collection)?;
        let path = self.document_path(collection);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<Value>>(&text) {
            Ok(elements) => {
                debug!(collection, count = elements.len(), "loaded document");
                Ok(elements)
            }
            Err(e) => {
                warn!(collection, error = %e, "unreadable document, treating collection as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_document(&self, collection: &str, elements: &[Value]) -> Result<(), RecordError> {
        let path = self.document_path(collection);
        let staging = path.with_extension("json.tmp");

        let text = serde_json::to_string_pretty(elements)?;
        fs::write(&staging, text)?;
        fs::rename(&staging, &path)?;

        debug!(collection, count = elements.len(), "wrote document");
        Ok(())
    }
}
