use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A student together with their current and completed courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub user_id: String,
    pub name: String,
    /// Courses with an `enrolled` enrollment, in enrollment storage order.
    pub enrolled_courses_ids: Vec<String>,
    /// Course id to grade for every graded `completed` enrollment.
    pub completed_courses: BTreeMap<String, String>,
}

impl Student {
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrolled_courses_ids.iter().any(|id| id == course_id)
    }

    pub fn has_completed(&self, course_id: &str) -> bool {
        self.completed_courses.contains_key(course_id)
    }

    /// Grade earned in a completed course.
    pub fn grade(&self, course_id: &str) -> Option<&str> {
        self.completed_courses.get(course_id).map(String::as_str)
    }

    pub fn current_course_load(&self) -> usize {
        self.enrolled_courses_ids.len()
    }

    pub fn transcript(&self) -> BTreeMap<String, String> {
        self.completed_courses.clone()
    }
}
