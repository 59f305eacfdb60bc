//! Error types for the entity services and the enrollment engine.

use std::error::Error;
use std::fmt;

use crate::record::RecordError;

/// Kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Staff,
    Course,
    Enrollment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Student => "Student",
            EntityKind::Staff => "Staff",
            EntityKind::Course => "Course",
            EntityKind::Enrollment => "Enrollment",
        };
        f.write_str(label)
    }
}

/// Rejections raised by `enroll`, grouped so callers can handle the whole
/// family at once through [`ServiceError::Enrollment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// The student already holds an `enrolled` record for this course.
    AlreadyEnrolled { course_id: String },
    /// The course has no free seats.
    CourseFull { course_id: String },
    /// The course overlaps one the student is already enrolled in.
    ScheduleConflict {
        course_id: String,
        conflicting_course_id: String,
    },
    /// The course does not exist.
    CourseNotFound { course_id: String },
}

impl EnrollmentError {
    /// The course the rejected enrollment targeted.
    pub fn course_id(&self) -> &str {
        match self {
            EnrollmentError::AlreadyEnrolled { course_id }
            | EnrollmentError::CourseFull { course_id }
            | EnrollmentError::ScheduleConflict { course_id, .. }
            | EnrollmentError::CourseNotFound { course_id } => course_id,
        }
    }
}

impl fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentError::AlreadyEnrolled { course_id } => {
                write!(f, "Student is already enrolled in course {}", course_id)
            }
            EnrollmentError::CourseFull { course_id } => write!(
                f,
                "Course {} is full and cannot accept more enrollments",
                course_id
            ),
            EnrollmentError::ScheduleConflict {
                course_id,
                conflicting_course_id,
            } => write!(
                f,
                "Schedule conflict: course {} conflicts with course {}",
                course_id, conflicting_course_id
            ),
            EnrollmentError::CourseNotFound { course_id } => {
                write!(f, "Course {} not found", course_id)
            }
        }
    }
}

impl Error for EnrollmentError {}

/// Error type for service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// The entity does not exist.
    NotFound { kind: EntityKind, id: String },
    /// An entity with this identity already exists.
    AlreadyExists { kind: EntityKind, id: String },
    /// The student has no active enrollment in the course.
    NotEnrolled {
        student_id: String,
        course_id: String,
    },
    /// Enrollment rule rejected the request.
    Enrollment(EnrollmentError),
    /// Record store error.
    Record(RecordError),
}

impl ServiceError {
    pub(crate) fn not_found(kind: EntityKind, id: &str) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn already_exists(kind: EntityKind, id: &str) -> Self {
        ServiceError::AlreadyExists {
            kind,
            id: id.to_string(),
        }
    }

    /// True for any member of the enrollment rejection family.
    pub fn is_enrollment_error(&self) -> bool {
        matches!(self, ServiceError::Enrollment(_))
    }

    pub fn as_enrollment_error(&self) -> Option<&EnrollmentError> {
        match self {
            ServiceError::Enrollment(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound { kind, id } => write!(f, "{} with ID {} not found", kind, id),
            ServiceError::AlreadyExists { kind, id } => {
                write!(f, "{} with ID {} already exists", kind, id)
            }
            ServiceError::NotEnrolled {
                student_id,
                course_id,
            } => write!(
                f,
                "Student {} is not enrolled in course {}",
                student_id, course_id
            ),
            ServiceError::Enrollment(e) => write!(f, "{}", e),
            ServiceError::Record(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Enrollment(e) => Some(e),
            ServiceError::Record(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RecordError> for ServiceError {
    fn from(err: RecordError) -> Self {
        ServiceError::Record(err)
    }
}

impl From<EnrollmentError> for ServiceError {
    fn from(err: EnrollmentError) -> Self {
        ServiceError::Enrollment(err)
    }
}
