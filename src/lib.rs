//! University records: students, staff, courses and enrollments kept as JSON
//! documents, with an enrollment engine enforcing capacity, uniqueness and
//! time-slot rules.

extern crate self as campus_records;

pub mod campus;
pub mod cli;
pub mod collections;
pub mod config;
pub mod logging;
pub mod record;
pub mod schedule;
pub mod service;
pub mod system;
pub mod views;

pub use campus::Campus;
pub use collections::{
    CourseRecord, EnrollmentRecord, EnrollmentStatus, StaffRecord, StudentRecord, DEFAULT_CAPACITY,
};
pub use config::{Config, ConfigError};
pub use record::{
    InMemoryRecordStore, JsonFileStore, Record, RecordError, RecordRepository, RecordStore,
    RecordsExt,
};
pub use schedule::{ScheduleError, StartTime, TimeSlot, Weekday};
pub use service::{
    CourseService, EnrollmentError, EnrollmentService, EntityKind, ServiceError, StaffService,
    StudentService,
};
pub use system::RecordSystem;
pub use views::{Course, Staff, Student};

// Derive macro for `Record`
pub use campus_records_macros::Record;
