use serde::{Deserialize, Serialize};

use crate::schedule::{slots_conflict, TimeSlot};

/// A course together with its currently enrolled students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub instructor_id: Option<String>,
    pub time_slot: Option<TimeSlot>,
    /// Students with an `enrolled` enrollment, in enrollment storage order.
    pub enrolled_students_ids: Vec<String>,
}

impl Course {
    pub fn current_enrollment_count(&self) -> usize {
        self.enrolled_students_ids.len()
    }

    pub fn is_full(&self) -> bool {
        self.current_enrollment_count() >= self.capacity as usize
    }

    pub fn is_student_enrolled(&self, student_id: &str) -> bool {
        self.enrolled_students_ids.iter().any(|id| id == student_id)
    }

    pub fn has_time_conflict(&self, other: &Course) -> bool {
        slots_conflict(self.time_slot.as_ref(), other.time_slot.as_ref())
    }
}
