use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{MemberAPIError, MemberSummary, SearchTerm},
    AppState,
};

pub const SEARCH_RESULT_LIMIT: i64 = 10;

#[tracing::instrument(name = "Search members route handler", skip_all)]
pub async fn search_members(
    State(state): State<AppState>,
    Json(request): Json<SearchMembersRequest>,
) -> Result<(StatusCode, Json<Vec<MemberSummary>>), MemberAPIError> {
    let term = SearchTerm::parse(request.search)?;

    let members = state
        .member_store
        .search_members(&term, SEARCH_RESULT_LIMIT)
        .await
        .map_err(|e| MemberAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(members)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchMembersRequest {
    #[serde(default)]
    pub search: Option<String>,
}
