//! Campus - the four services wired to one shared record system.

use tracing::debug;

use crate::collections::{CourseRecord, EnrollmentRecord, StaffRecord, StudentRecord};
use crate::config::Config;
use crate::record::{InMemoryRecordStore, JsonFileStore, Record, RecordError, RecordStore};
use crate::service::{CourseService, EnrollmentService, StaffService, StudentService};
use crate::system::RecordSystem;

/// Services sharing one record store.
#[derive(Clone)]
pub struct Campus<S> {
    pub system: RecordSystem<S>,
    pub students: StudentService<S>,
    pub staff: StaffService<S>,
    pub courses: CourseService<S>,
    pub enrollments: EnrollmentService<S>,
}

impl<S: RecordStore + Clone> Campus<S> {
    pub fn new(store: S) -> Self {
        let system = RecordSystem::new(store);
        Self {
            students: StudentService::new(system.clone()),
            staff: StaffService::new(system.clone()),
            courses: CourseService::new(system.clone()),
            enrollments: EnrollmentService::new(system.clone()),
            system,
        }
    }
}

impl Campus<JsonFileStore> {
    /// File-backed campus under `config.data_dir`, with all four documents
    /// present on return.
    pub fn open(config: &Config) -> Result<Self, RecordError> {
        let store = JsonFileStore::open(&config.data_dir)?;
        for collection in [
            StudentRecord::COLLECTION,
            StaffRecord::COLLECTION,
            CourseRecord::COLLECTION,
            EnrollmentRecord::COLLECTION,
        ] {
            store.ensure_document(collection)?;
        }
        debug!(data_dir = %config.data_dir.display(), "campus opened");
        Ok(Self::new(store))
    }
}

impl Campus<InMemoryRecordStore> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryRecordStore::new())
    }
}
