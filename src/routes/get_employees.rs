use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde_json::Value;

use crate::{domain::MemberAPIError, AppState};

#[tracing::instrument(name = "Get employees route handler", skip_all)]
pub async fn get_employees(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Value>>), MemberAPIError> {
    let employees = state
        .employee_store
        .get_employees()
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(employees)))
}
