//! Enrollment engine - enroll, drop and complete transitions.
//!
//! Each (student, course) enrollment record moves `enrolled -> dropped` or
//! `enrolled -> completed`; both are terminal. Records are updated in place
//! and never deleted by a transition, so history is kept. Enrolling again
//! after a drop creates a new record with a new identity.

use tracing::info;

use crate::collections::{CourseRecord, EnrollmentRecord, EnrollmentStatus};
use crate::record::RecordStore;
use crate::system::RecordSystem;

use super::error::{EnrollmentError, EntityKind, ServiceError};

/// Validates and applies enrollment transitions.
#[derive(Clone)]
pub struct EnrollmentService<S> {
    system: RecordSystem<S>,
}

impl<S: RecordStore> EnrollmentService<S> {
    pub fn new(system: RecordSystem<S>) -> Self {
        Self { system }
    }

    /// Enroll a student in a course.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// student exists, course exists, not already enrolled, capacity, then
    /// schedule conflicts against the student's other enrolled courses.
    pub fn enroll(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollmentRecord, ServiceError> {
        self.require_student(student_id)?;
        let course = self.require_course(course_id)?;

        let enrollments = self.system.enrollments();
        let active: Vec<EnrollmentRecord> = enrollments
            .by_student(student_id)?
            .into_iter()
            .filter(EnrollmentRecord::is_enrolled)
            .collect();

        if active.iter().any(|e| e.course_id == course_id) {
            return Err(EnrollmentError::AlreadyEnrolled {
                course_id: course_id.to_string(),
            }
            .into());
        }

        let seats_taken = enrollments
            .by_course(course_id)?
            .iter()
            .filter(|e| e.is_enrolled())
            .count();
        if seats_taken >= course.capacity as usize {
            return Err(EnrollmentError::CourseFull {
                course_id: course_id.to_string(),
            }
            .into());
        }

        for existing in &active {
            let Some(other) = self.system.courses().get(&existing.course_id)? else {
                continue;
            };
            if course.has_time_conflict(&other) {
                return Err(EnrollmentError::ScheduleConflict {
                    course_id: course.id.clone(),
                    conflicting_course_id: other.id,
                }
                .into());
            }
        }

        let enrollment = enrollments.add(&EnrollmentRecord::enrolled(student_id, course_id))?;
        info!(student_id, course_id, enrollment_id = %enrollment.id, "student enrolled");
        Ok(enrollment)
    }

    /// Drop the student's active enrollment in a course. The record is kept
    /// with status `dropped`.
    pub fn drop(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollmentRecord, ServiceError> {
        self.require_student(student_id)?;
        self.require_course(course_id)?;

        let mut enrollment = self.active_enrollment(student_id, course_id)?;
        enrollment.mark_dropped();
        let enrollment = self.system.enrollments().update(&enrollment)?;
        info!(student_id, course_id, "course dropped");
        Ok(enrollment)
    }

    /// Mark the student's active enrollment in a course as completed with a
    /// grade.
    ///
    /// Unlike `drop`, this does not check that the student and course
    /// still exist; only an active enrollment is required.
    pub fn complete(
        &self,
        student_id: &str,
        course_id: &str,
        grade: &str,
    ) -> Result<EnrollmentRecord, ServiceError> {
        let mut enrollment = self.active_enrollment(student_id, course_id)?;
        enrollment.mark_completed(grade);
        let enrollment = self.system.enrollments().update(&enrollment)?;
        info!(student_id, course_id, grade, "course completed");
        Ok(enrollment)
    }

    /// Every enrollment of a student, any status, in storage order.
    pub fn student_enrollments(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentRecord>, ServiceError> {
        self.require_student(student_id)?;
        Ok(self.system.enrollments().by_student(student_id)?)
    }

    /// Every enrollment in a course, any status, in storage order.
    pub fn course_enrollments(
        &self,
        course_id: &str,
    ) -> Result<Vec<EnrollmentRecord>, ServiceError> {
        if !self.system.courses().contains(course_id)? {
            return Err(ServiceError::not_found(EntityKind::Course, course_id));
        }
        Ok(self.system.enrollments().by_course(course_id)?)
    }

    fn require_student(&self, student_id: &str) -> Result<(), ServiceError> {
        if self.system.students().contains(student_id)? {
            Ok(())
        } else {
            Err(ServiceError::not_found(EntityKind::Student, student_id))
        }
    }

    fn require_course(&self, course_id: &str) -> Result<CourseRecord, ServiceError> {
        self.system.courses().get(course_id)?.ok_or_else(|| {
            EnrollmentError::CourseNotFound {
                course_id: course_id.to_string(),
            }
            .into()
        })
    }

    fn active_enrollment(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollmentRecord, ServiceError> {
        self.system
            .enrollments()
            .by_student(student_id)?
            .into_iter()
            .find(|e| e.course_id == course_id && e.status == EnrollmentStatus::Enrolled)
            .ok_or_else(|| ServiceError::NotEnrolled {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            })
    }
}
