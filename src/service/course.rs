use tracing::info;

use crate::collections::CourseRecord;
use crate::record::RecordStore;
use crate::system::RecordSystem;
use crate::views::Course;

use super::error::{EntityKind, ServiceError};

/// Course operations over a shared record system.
#[derive(Clone)]
pub struct CourseService<S> {
    system: RecordSystem<S>,
}

impl<S: RecordStore> CourseService<S> {
    pub fn new(system: RecordSystem<S>) -> Self {
        Self { system }
    }

    pub fn add_course(&self, record: CourseRecord) -> Result<Course, ServiceError> {
        if self.course_exists(&record.id)? {
            return Err(ServiceError::already_exists(EntityKind::Course, &record.id));
        }
        let record = self.system.courses().add(&record)?;
        info!(course_id = %record.id, capacity = record.capacity, "course added");
        self.get_course(&record.id)
    }

    pub fn get_course(&self, course_id: &str) -> Result<Course, ServiceError> {
        self.system
            .get_course(course_id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Course, course_id))
    }

    pub fn course_exists(&self, course_id: &str) -> Result<bool, ServiceError> {
        Ok(self.system.courses().contains(course_id)?)
    }

    pub fn get_all_courses(&self) -> Result<Vec<Course>, ServiceError> {
        Ok(self.system.get_all_courses()?)
    }

    /// Delete a course and every enrollment that references it.
    pub fn remove_course(&self, course_id: &str) -> Result<(), ServiceError> {
        if !self.course_exists(course_id)? {
            return Err(ServiceError::not_found(EntityKind::Course, course_id));
        }

        let enrollments = self.system.enrollments();
        let owned = enrollments.by_course(course_id)?;
        for enrollment in &owned {
            enrollments.delete(&enrollment.id)?;
        }
        self.system.courses().delete(course_id)?;
        info!(course_id, enrollments_removed = owned.len(), "course removed");
        Ok(())
    }
}
