use serde::{Deserialize, Serialize};

/// A staff member together with the courses they teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub user_id: String,
    pub name: String,
    pub department: String,
    /// Courses whose `instructor_id` is this staff member.
    pub assigned_courses_ids: Vec<String>,
}

impl Staff {
    pub fn is_assigned_to(&self, course_id: &str) -> bool {
        self.assigned_courses_ids.iter().any(|id| id == course_id)
    }

    pub fn course_load(&self) -> usize {
        self.assigned_courses_ids.len()
    }
}
