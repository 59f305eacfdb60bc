//! Read-only entity views assembled from the stored collections.
//!
//! Views are never persisted. Relationship fields are recomputed from the
//! enrollment and course collections every time a view is built.

mod course;
mod staff;
mod student;

pub use course::Course;
pub use staff::Staff;
pub use student::Student;
