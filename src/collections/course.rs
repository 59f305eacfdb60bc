use campus_records_macros::Record;
use serde::{Deserialize, Serialize};

use crate::schedule::{slots_conflict, TimeSlot};

/// Seats offered when a course does not say otherwise.
pub const DEFAULT_CAPACITY: u32 = 30;

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

/// A course as stored in `courses.json`.
///
/// `instructor_id` is not checked against the staff collection and may name
/// a staff member that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(
    collection = "courses",
    duplicate = "Failed to add course. Course with id '{id}' already exists."
)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub time_slot: Option<TimeSlot>,
}

impl CourseRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: DEFAULT_CAPACITY,
            instructor_id: None,
            time_slot: None,
        }
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    pub fn with_time_slot(mut self, time_slot: TimeSlot) -> Self {
        self.time_slot = Some(time_slot);
        self
    }

    /// True when both courses have time slots that overlap.
    pub fn has_time_conflict(&self, other: &CourseRecord) -> bool {
        slots_conflict(self.time_slot.as_ref(), other.time_slot.as_ref())
    }
}
