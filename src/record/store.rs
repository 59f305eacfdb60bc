//! RecordStore - Abstract keyed CRUD over whole-collection documents.

use serde::Deserialize;
use serde_json::Value;

use super::{Record, RecordError};

/// Abstract CRUD storage for records.
///
/// Implementations only know how to load and save a collection's document
/// (an ordered list of JSON objects). Every record operation reads the whole
/// document, and every mutation writes the whole document back, so the
/// visible effect of a mutation is all-or-nothing.
pub trait RecordStore: Send + Sync {
    /// Load every element of a collection's document, in storage order.
    /// A missing document is an empty collection.
    fn load_document(&self, collection: &str) -> Result<Vec<Value>, RecordError>;

    /// Replace a collection's document with `elements`.
    fn save_document(&self, collection: &str, elements: &[Value]) -> Result<(), RecordError>;

    /// Get a record by ID. Returns None if not found.
    fn get_record<M: Record>(&self, id: &str) -> Result<Option<M>, RecordError> {
        for element in self.load_document(M::COLLECTION)? {
            let record: M = serde_json::from_value(element)?;
            if record.id() == id {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Get every record of the collection, in storage order.
    fn all_records<M: Record>(&self) -> Result<Vec<M>, RecordError> {
        self.load_document(M::COLLECTION)?
            .into_iter()
            .map(|element| serde_json::from_value(element).map_err(RecordError::from))
            .collect()
    }

    /// Insert a new record. Fails if a record with the same identity exists.
    fn insert_record<M: Record>(&self, record: &M) -> Result<M, RecordError> {
        let mut elements = self.load_document(M::COLLECTION)?;
        for element in &elements {
            let existing = M::deserialize(element)?;
            if existing.id() == record.id() {
                return Err(RecordError::duplicate::<M>(record.id()));
            }
        }

        elements.push(serde_json::to_value(record)?);
        self.save_document(M::COLLECTION, &elements)?;
        Ok(record.clone())
    }

    /// Replace an existing record in place. Fails if no record shares its identity.
    fn update_record<M: Record>(&self, record: &M) -> Result<M, RecordError> {
        let mut elements = self.load_document(M::COLLECTION)?;
        let mut position = None;
        for (index, element) in elements.iter().enumerate() {
            if M::deserialize(element)?.id() == record.id() {
                position = Some(index);
                break;
            }
        }

        let index = position.ok_or_else(|| RecordError::not_found::<M>(record.id()))?;
        elements[index] = serde_json::to_value(record)?;
        self.save_document(M::COLLECTION, &elements)?;
        Ok(record.clone())
    }

    /// Delete a record by ID. Returns true if it existed.
    fn delete_record<M: Record>(&self, id: &str) -> Result<bool, RecordError> {
        let elements = self.load_document(M::COLLECTION)?;
        let before = elements.len();

        let mut kept = Vec::with_capacity(before);
        for element in elements {
            if M::deserialize(&element)?.id() != id {
                kept.push(element);
            }
        }

        if kept.len() == before {
            return Ok(false);
        }
        self.save_document(M::COLLECTION, &kept)?;
        Ok(true)
    }

    /// Find records matching a predicate, in storage order.
    fn find_records<M: Record>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<M>, RecordError> {
        let mut results = Vec::new();
        for record in self.all_records::<M>()? {
            if predicate(&record) {
                results.push(record);
            }
        }
        Ok(results)
    }
}
