use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{MemberAPIError, MemberName},
    AppState,
};

#[tracing::instrument(name = "Get member names route handler", skip_all)]
pub async fn get_member_names(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<MemberName>>), MemberAPIError> {
    let names = state
        .member_store
        .get_member_names()
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    if names.is_empty() {
        return Err(MemberAPIError::NoMembersFound);
    }
    tracing::debug!(
        "member names: {:?}",
        names.iter().map(|n| &n.full_name).collect::<Vec<_>>()
    );

    Ok((StatusCode::OK, Json(names)))
}
