use std::sync::Arc;

use crate::domain::{EmployeeStore, MemberStore};
pub type EmployeeStoreType = Arc<dyn EmployeeStore + Send + Sync>;
pub type MemberStoreType = Arc<dyn MemberStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub employee_store: EmployeeStoreType,
    pub member_store: MemberStoreType,
}

impl AppState {
    pub fn new(
        employee_store: EmployeeStoreType,
        member_store: MemberStoreType,
    ) -> Self {
        Self {
            employee_store,
            member_store,
        }
    }
}
