use color_eyre::eyre::eyre;
use serde_json::Value;
use sqlx::PgPool;

use crate::domain::{EmployeeStore, EmployeeStoreError};

pub struct PostgresEmployeeStore {
    pool: PgPool,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EmployeeStore for PostgresEmployeeStore {
    // Rows are passed through whole, whatever columns the table has.
    #[tracing::instrument(name = "Getting employees from PostgreSQL", skip_all)]
    async fn get_employees(&self) -> Result<Vec<Value>, EmployeeStoreError> {
        sqlx::query_scalar::<_, Value>(
            r#"
                SELECT to_jsonb(employees) FROM employees
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EmployeeStoreError::UnexpectedError(eyre!(e)))
    }
}
