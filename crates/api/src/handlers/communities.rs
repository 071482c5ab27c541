//! Handlers for community listing and lookup.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentiq_core::error::CoreError;
use rentiq_core::types::Community;
use rentiq_db::repositories::CommunityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 100;
const MAX_PAGE_SIZE: i64 = 500;

/// Query parameters for `GET /api/v1/communities`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommunitiesParams {
    /// Restrict to a single MSA.
    pub msa_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response body for the community list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommunitiesResponse {
    pub communities: Vec<Community>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GET /api/v1/communities
///
/// Lists communities, optionally scoped to one MSA, with a pagination-
/// independent total count.
pub async fn list_communities(
    State(state): State<AppState>,
    Query(params): Query<ListCommunitiesParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0).max(0);

    let (communities, total) =
        CommunityRepo::list(&state.pool, params.msa_id, limit, offset).await?;

    Ok(Json(ListCommunitiesResponse {
        communities,
        total,
        limit,
        offset,
    }))
}

/// GET /api/v1/communities/{id}
pub async fn get_community(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let community = CommunityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Community",
            id: id.to_string(),
        }))?;

    Ok(Json(community))
}
