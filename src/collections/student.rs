use campus_records_macros::Record;
use serde::{Deserialize, Serialize};

/// A student as stored in `students.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "students")]
pub struct StudentRecord {
    #[record(id)]
    pub user_id: String,
    pub name: String,
}

impl StudentRecord {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}
