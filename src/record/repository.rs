//! RecordRepository - one collection of a store, addressed by record type.

use std::marker::PhantomData;

use super::{Record, RecordError, RecordStore};

/// Borrowed view of a single collection in a [`RecordStore`].
///
/// The record type fixes the collection, so call sites read as
/// `system.courses().get("c1")` instead of naming the type on every call.
pub struct RecordRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> RecordRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// The record whose identity equals `id`, if stored.
    pub fn get(&self, id: &str) -> Result<Option<M>, RecordError> {
        self.store.get_record(id)
    }

    pub fn contains(&self, id: &str) -> Result<bool, RecordError> {
        Ok(self.get(id)?.is_some())
    }

    /// Every record in document order.
    pub fn all(&self) -> Result<Vec<M>, RecordError> {
        self.store.all_records()
    }

    /// Append `record`; `RecordError::Duplicate` if its identity is taken.
    pub fn add(&self, record: &M) -> Result<M, RecordError> {
        self.store.insert_record(record)
    }

    /// Overwrite the stored record sharing `record`'s identity, keeping its
    /// position; `RecordError::NotFound` if there is none.
    pub fn update(&self, record: &M) -> Result<M, RecordError> {
        self.store.update_record(record)
    }

    /// Remove the record with identity `id`. `false` when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool, RecordError> {
        self.store.delete_record::<M>(id)
    }

    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, RecordError> {
        self.store.find_records(predicate)
    }
}

/// `store.records::<CourseRecord>()` on any [`RecordStore`].
pub trait RecordsExt: RecordStore + Sized {
    fn records<M: Record>(&self) -> RecordRepository<'_, Self, M> {
        RecordRepository::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
