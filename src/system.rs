//! RecordSystem - joins the four collections into entity views.
//!
//! Nothing is cached. Each getter performs one base lookup and then scans the
//! enrollment (or course) collection to derive the relationship fields.

use std::collections::BTreeMap;

use crate::collections::{
    CourseRecord, EnrollmentRecord, EnrollmentStatus, StaffRecord, StudentRecord,
};
use crate::record::{RecordError, RecordRepository, RecordStore, RecordsExt};
use crate::views::{Course, Staff, Student};

/// Shared access to the four collections of one record store.
#[derive(Clone)]
pub struct RecordSystem<S> {
    store: S,
}

impl<S: RecordStore> RecordSystem<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn students(&self) -> RecordRepository<'_, S, StudentRecord> {
        self.store.records()
    }

    pub fn staff(&self) -> RecordRepository<'_, S, StaffRecord> {
        self.store.records()
    }

    pub fn courses(&self) -> RecordRepository<'_, S, CourseRecord> {
        self.store.records()
    }

    pub fn enrollments(&self) -> RecordRepository<'_, S, EnrollmentRecord> {
        self.store.records()
    }

    /// Student view, or None if no such student is stored.
    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>, RecordError> {
        let Some(record) = self.students().get(student_id)? else {
            return Ok(None);
        };

        let enrollments = self.enrollments().by_student(student_id)?;
        let enrolled_courses_ids = enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Enrolled)
            .map(|e| e.course_id.clone())
            .collect();
        let completed_courses: BTreeMap<String, String> = enrollments
            .into_iter()
            .filter(|e| e.status == EnrollmentStatus::Completed)
            .filter_map(|e| e.grade.map(|grade| (e.course_id, grade)))
            .collect();

        Ok(Some(Student {
            user_id: record.user_id,
            name: record.name,
            enrolled_courses_ids,
            completed_courses,
        }))
    }

    /// Staff view, or None if no such staff member is stored.
    pub fn get_staff(&self, staff_id: &str) -> Result<Option<Staff>, RecordError> {
        let Some(record) = self.staff().get(staff_id)? else {
            return Ok(None);
        };

        let assigned_courses_ids = self
            .courses()
            .find(&|c| c.instructor_id.as_deref() == Some(staff_id))?
            .into_iter()
            .map(|c| c.id)
            .collect();

        Ok(Some(Staff {
            user_id: record.user_id,
            name: record.name,
            department: record.department,
            assigned_courses_ids,
        }))
    }

    /// Course view, or None if no such course is stored.
    pub fn get_course(&self, course_id: &str) -> Result<Option<Course>, RecordError> {
        let Some(record) = self.courses().get(course_id)? else {
            return Ok(None);
        };

        let enrolled_students_ids = self
            .enrollments()
            .by_course(course_id)?
            .into_iter()
            .filter(|e| e.status == EnrollmentStatus::Enrolled)
            .map(|e| e.student_id)
            .collect();

        Ok(Some(Course {
            id: record.id,
            name: record.name,
            capacity: record.capacity,
            instructor_id: record.instructor_id,
            time_slot: record.time_slot,
            enrolled_students_ids,
        }))
    }

    pub fn get_all_students(&self) -> Result<Vec<Student>, RecordError> {
        let mut views = Vec::new();
        for record in self.students().all()? {
            if let Some(view) = self.get_student(&record.user_id)? {
                views.push(view);
            }
        }
        Ok(views)
    }

    pub fn get_all_staff(&self) -> Result<Vec<Staff>, RecordError> {
        let mut views = Vec::new();
        for record in self.staff().all()? {
            if let Some(view) = self.get_staff(&record.user_id)? {
                views.push(view);
            }
        }
        Ok(views)
    }

    pub fn get_all_courses(&self) -> Result<Vec<Course>, RecordError> {
        let mut views = Vec::new();
        for record in self.courses().all()? {
            if let Some(view) = self.get_course(&record.id)? {
                views.push(view);
            }
        }
        Ok(views)
    }
}
