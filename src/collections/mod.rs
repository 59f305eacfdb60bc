//! Stored record shapes for the four collections.
//!
//! Stored records carry no relationship lists: enrollments are the only link
//! between students and courses, and a course names its instructor by id.

mod course;
mod enrollment;
mod staff;
mod student;

pub use course::{CourseRecord, DEFAULT_CAPACITY};
pub use enrollment::{EnrollmentRecord, EnrollmentStatus};
pub use staff::StaffRecord;
pub use student::StudentRecord;
