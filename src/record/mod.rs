//! Records - keyed, collection-scoped storage for plain serde structs.
//!
//! A record is a flat struct persisted as one element of its collection's
//! document. Every record type names its collection and the field that
//! carries its identity; stores enforce identity uniqueness within a
//! collection.
//!
//! ## Example
//!
//! ```ignore
//! use campus_records::{Record, RecordsExt, InMemoryRecordStore};
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "students")]
//! struct StudentRecord {
//!     #[record(id)]
//!     pub user_id: String,
//!     pub name: String,
//! }
//!
//! let store = InMemoryRecordStore::new();
//! store.records::<StudentRecord>().add(&student)?;
//! let loaded = store.records::<StudentRecord>().get("s1")?;
//! ```

mod in_memory;
mod json_file;
mod repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be stored as records.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "students", "courses").
    /// The JSON file store keeps each collection in `<collection>.json`.
    const COLLECTION: &'static str;

    /// Name of the field that carries the record identity.
    const ID_FIELD: &'static str;

    /// Returns the unique identifier for this record instance.
    fn id(&self) -> &str;

    /// Message reported when a record with `id` already exists.
    fn duplicate_message(id: &str) -> String {
        format!(
            "Entity with {} '{}' already exists.",
            Self::ID_FIELD,
            id
        )
    }
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A record with the same identity is already stored.
    Duplicate {
        collection: String,
        id: String,
        message: String,
    },
    /// No record with this identity exists.
    NotFound { collection: String, id: String },
    /// Serialization/deserialization error.
    Serde(String),
    /// Reading or writing a backing document failed.
    Io(String),
    /// Storage-level error.
    Storage(String),
}

impl RecordError {
    pub(crate) fn duplicate<M: Record>(id: &str) -> Self {
        RecordError::Duplicate {
            collection: M::COLLECTION.to_string(),
            id: id.to_string(),
            message: M::duplicate_message(id),
        }
    }

    pub(crate) fn not_found<M: Record>(id: &str) -> Self {
        RecordError::NotFound {
            collection: M::COLLECTION.to_string(),
            id: id.to_string(),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Duplicate { message, .. } => write!(f, "{}", message),
            RecordError::NotFound { collection, id } => {
                write!(f, "record not found: {}:{}", collection, id)
            }
            RecordError::Serde(msg) => write!(f, "record serialization error: {}", msg),
            RecordError::Io(msg) => write!(f, "record document error: {}", msg),
            RecordError::Storage(msg) => write!(f, "record storage error: {}", msg),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Io(err.to_string())
    }
}

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;
pub use repository::{RecordRepository, RecordsExt};
pub use store::RecordStore;
