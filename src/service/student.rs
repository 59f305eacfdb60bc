use std::collections::BTreeMap;

use tracing::info;

use crate::collections::{EnrollmentStatus, StudentRecord};
use crate::record::RecordStore;
use crate::system::RecordSystem;
use crate::views::Student;

use super::error::{EntityKind, ServiceError};

/// Student operations over a shared record system.
#[derive(Clone)]
pub struct StudentService<S> {
    system: RecordSystem<S>,
}

impl<S: RecordStore> StudentService<S> {
    pub fn new(system: RecordSystem<S>) -> Self {
        Self { system }
    }

    /// Store a new student and return its view.
    pub fn add_student(&self, record: StudentRecord) -> Result<Student, ServiceError> {
        if self.student_exists(&record.user_id)? {
            return Err(ServiceError::already_exists(EntityKind::Student, &record.user_id));
        }
        let record = self.system.students().add(&record)?;
        info!(student_id = %record.user_id, "student added");
        self.get_student(&record.user_id)
    }

    pub fn get_student(&self, student_id: &str) -> Result<Student, ServiceError> {
        self.system
            .get_student(student_id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Student, student_id))
    }

    pub fn student_exists(&self, student_id: &str) -> Result<bool, ServiceError> {
        Ok(self.system.students().contains(student_id)?)
    }

    pub fn get_all_students(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.system.get_all_students()?)
    }

    /// Delete a student and every enrollment that references it.
    pub fn remove_student(&self, student_id: &str) -> Result<(), ServiceError> {
        if !self.student_exists(student_id)? {
            return Err(ServiceError::not_found(EntityKind::Student, student_id));
        }

        let enrollments = self.system.enrollments();
        let owned = enrollments.by_student(student_id)?;
        for enrollment in &owned {
            enrollments.delete(&enrollment.id)?;
        }
        self.system.students().delete(student_id)?;
        info!(student_id, enrollments_removed = owned.len(), "student removed");
        Ok(())
    }

    /// Course id to grade for each completed enrollment. A completion
    /// recorded without a grade maps to `None`.
    pub fn get_transcript(
        &self,
        student_id: &str,
    ) -> Result<BTreeMap<String, Option<String>>, ServiceError> {
        if !self.student_exists(student_id)? {
            return Err(ServiceError::not_found(EntityKind::Student, student_id));
        }

        Ok(self
            .system
            .enrollments()
            .by_student(student_id)?
            .into_iter()
            .filter(|e| e.status == EnrollmentStatus::Completed)
            .map(|e| (e.course_id, e.grade))
            .collect())
    }
}
