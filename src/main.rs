use std::sync::Arc;

use member_ledger::{
    app_state::AppState,
    get_postgres_pool,
    services::data_stores::{PostgresEmployeeStore, PostgresMemberStore},
    utils::{
        constants::{prod, DATABASE_MAX_CONNECTIONS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use sqlx::PgPool;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let pg_pool = configure_postgresql().await;
    let employee_store = Arc::new(PostgresEmployeeStore::new(pg_pool.clone()));
    let member_store = Arc::new(PostgresMemberStore::new(pg_pool));

    let app_state = AppState::new(employee_store, member_store);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn configure_postgresql() -> PgPool {
    get_postgres_pool(&DATABASE_URL, *DATABASE_MAX_CONNECTIONS)
        .await
        .expect("Failed to create Postgres connection pool!")
}
