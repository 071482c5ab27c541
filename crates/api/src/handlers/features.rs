//! Handlers for feature catalog listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rentiq_core::types::Feature;
use rentiq_db::repositories::FeatureRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/features`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturesParams {
    /// Restrict counts and presence to units of one community.
    pub community_id: Option<Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeaturesResponse {
    pub features: Vec<Feature>,
}

/// GET /api/v1/features
///
/// Lists features with their computed unit counts, most-used first.
pub async fn list_features(
    State(state): State<AppState>,
    Query(params): Query<ListFeaturesParams>,
) -> AppResult<impl IntoResponse> {
    let features: Vec<Feature> = FeatureRepo::list(&state.pool, params.community_id).await?;

    Ok(Json(ListFeaturesResponse { features }))
}
