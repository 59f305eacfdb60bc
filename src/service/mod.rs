//! Entity services and the enrollment engine.
//!
//! Every service wraps a clone of the same [`RecordSystem`](crate::system::RecordSystem),
//! so they all see one set of collections. Services validate existence,
//! enforce uniqueness and cascade deletes; the engine owns the enrollment
//! rules.
//!
//! ```ignore
//! use campus_records::{Campus, StudentRecord, CourseRecord};
//!
//! let campus = Campus::in_memory();
//! campus.students.add_student(StudentRecord::new("s1", "Ada"))?;
//! campus.courses.add_course(CourseRecord::new("c1", "Compilers"))?;
//! campus.enrollments.enroll("s1", "c1")?;
//! ```

mod course;
mod enrollment;
mod error;
mod staff;
mod student;

pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use error::{EnrollmentError, EntityKind, ServiceError};
pub use staff::StaffService;
pub use student::StudentService;
