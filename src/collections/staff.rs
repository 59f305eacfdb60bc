use campus_records_macros::Record;
use serde::{Deserialize, Serialize};

/// A staff member as stored in `staff.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "staff")]
pub struct StaffRecord {
    #[record(id)]
    pub user_id: String,
    pub name: String,
    pub department: String,
}

impl StaffRecord {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            department: department.into(),
        }
    }
}
