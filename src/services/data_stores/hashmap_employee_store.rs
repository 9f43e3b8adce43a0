use serde_json::Value;

use crate::domain::{EmployeeStore, EmployeeStoreError};

#[derive(Default)]
pub struct HashmapEmployeeStore {
    employees: Vec<Value>,
}

impl HashmapEmployeeStore {
    pub fn new(employees: Vec<Value>) -> Self {
        Self { employees }
    }
}

#[async_trait::async_trait]
impl EmployeeStore for HashmapEmployeeStore {
    async fn get_employees(&self) -> Result<Vec<Value>, EmployeeStoreError> {
        Ok(self.employees.clone())
    }
}
