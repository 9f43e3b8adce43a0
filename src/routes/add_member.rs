use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{MemberAPIError, MemberId, NewMember},
    AppState,
};

pub const ADD_MEMBER_SUCCESS_MESSAGE: &str =
    "Member and installment added successfully";

#[tracing::instrument(name = "Add member route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<AddMemberResponse>), MemberAPIError> {
    let member = NewMember::new(
        request.full_name,
        request.phone,
        request.contribution_amt,
        request.installment_amt,
    );

    let member_id = state
        .member_store
        .add_member(&member)
        .await
        .map_err(|e| MemberAPIError::AddMemberFailed(eyre!(e)))?;

    let response = Json(AddMemberResponse {
        message: ADD_MEMBER_SUCCESS_MESSAGE.to_string(),
        member_id,
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AddMemberResponse {
    pub message: String,
    pub member_id: MemberId,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddMemberRequest {
    pub full_name: String,
    pub phone: String,
    pub contribution_amt: Decimal,
    pub installment_amt: Decimal,
}
