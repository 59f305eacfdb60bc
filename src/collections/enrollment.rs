use std::fmt;

use campus_records_macros::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{RecordError, RecordRepository, RecordStore};

/// Lifecycle of one enrollment. `Dropped` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Dropped,
    Completed,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnrollmentStatus::Enrolled => "enrolled",
            EnrollmentStatus::Dropped => "dropped",
            EnrollmentStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// One student's enrollment in one course, as stored in `enrollments.json`.
///
/// The identity is a generated token rather than the (student, course) pair:
/// re-enrolling after a drop creates a second record next to the dropped one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "enrollments")]
pub struct EnrollmentRecord {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub grade: Option<String>,
}

impl EnrollmentRecord {
    /// A fresh `enrolled` record with a new random identity.
    pub fn enrolled(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.into(),
            course_id: course_id.into(),
            status: EnrollmentStatus::Enrolled,
            grade: None,
        }
    }

    pub fn is_enrolled(&self) -> bool {
        self.status == EnrollmentStatus::Enrolled
    }

    pub fn mark_dropped(&mut self) {
        self.status = EnrollmentStatus::Dropped;
    }

    pub fn mark_completed(&mut self, grade: impl Into<String>) {
        self.status = EnrollmentStatus::Completed;
        self.grade = Some(grade.into());
    }
}

impl<'a, S: RecordStore> RecordRepository<'a, S, EnrollmentRecord> {
    /// Every enrollment of a student, any status, in storage order.
    pub fn by_student(&self, student_id: &str) -> Result<Vec<EnrollmentRecord>, RecordError> {
        self.find(&|e| e.student_id == student_id)
    }

    /// Every enrollment in a course, any status, in storage order.
    pub fn by_course(&self, course_id: &str) -> Result<Vec<EnrollmentRecord>, RecordError> {
        self.find(&|e| e.course_id == course_id)
    }
}
