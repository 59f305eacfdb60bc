use tracing::info;

use crate::collections::StaffRecord;
use crate::record::RecordStore;
use crate::system::RecordSystem;
use crate::views::Staff;

use super::error::{EntityKind, ServiceError};

/// Staff operations over a shared record system.
#[derive(Clone)]
pub struct StaffService<S> {
    system: RecordSystem<S>,
}

impl<S: RecordStore> StaffService<S> {
    pub fn new(system: RecordSystem<S>) -> Self {
        Self { system }
    }

    pub fn add_staff(&self, record: StaffRecord) -> Result<Staff, ServiceError> {
        if self.staff_exists(&record.user_id)? {
            return Err(ServiceError::already_exists(EntityKind::Staff, &record.user_id));
        }
        let record = self.system.staff().add(&record)?;
        info!(staff_id = %record.user_id, department = %record.department, "staff added");
        self.get_staff(&record.user_id)
    }

    pub fn get_staff(&self, staff_id: &str) -> Result<Staff, ServiceError> {
        self.system
            .get_staff(staff_id)?
            .ok_or_else(|| ServiceError::not_found(EntityKind::Staff, staff_id))
    }

    pub fn staff_exists(&self, staff_id: &str) -> Result<bool, ServiceError> {
        Ok(self.system.staff().contains(staff_id)?)
    }

    pub fn get_all_staff(&self) -> Result<Vec<Staff>, ServiceError> {
        Ok(self.system.get_all_staff()?)
    }

    /// Delete a staff member. Courses they teach keep their `instructor_id`.
    pub fn remove_staff(&self, staff_id: &str) -> Result<(), ServiceError> {
        if !self.system.staff().delete(staff_id)? {
            return Err(ServiceError::not_found(EntityKind::Staff, staff_id));
        }
        info!(staff_id, "staff removed");
        Ok(())
    }
}
