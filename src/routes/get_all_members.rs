use axum::{extract::Query, extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        group_member_installments, MemberAPIError, MemberId,
        MemberWithInstallments,
    },
    AppState,
};

#[derive(Deserialize)]
pub struct AllMembersQueryParams {
    member_id: Option<String>,
}

#[tracing::instrument(name = "Get all members route handler", skip_all)]
pub async fn get_all_members(
    State(state): State<AppState>,
    query_params: Query<AllMembersQueryParams>,
) -> Result<(StatusCode, Json<Vec<MemberWithInstallments>>), MemberAPIError> {
    let member_id = query_params
        .member_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .map(MemberId::parse)
        .transpose()?;
    tracing::debug!("member_id: {:?}", member_id);

    let rows = state
        .member_store
        .get_member_installment_rows(member_id.as_ref())
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(group_member_installments(rows))))
}
