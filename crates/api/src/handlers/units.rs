//! Handlers for unit search.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use rentiq_core::filters::{validate_search_filters, SearchFilters};
use rentiq_core::types::Unit;
use rentiq_db::repositories::UnitRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /api/v1/units/search`.
///
/// `total` counts every matching unit regardless of pagination;
/// `applied_filters` echoes the request so clients can render active chips
/// without re-deriving state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUnitsResponse {
    pub units: Vec<Unit>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub applied_filters: SearchFilters,
}

/// POST /api/v1/units/search
///
/// Validates the filter payload, then runs the two-phase search (count, then
/// page fetch). Invalid filters return 400 with the complete violation list.
pub async fn search_units(
    State(state): State<AppState>,
    Json(filters): Json<SearchFilters>,
) -> AppResult<impl IntoResponse> {
    let violations = validate_search_filters(&filters);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let result = UnitRepo::search(&state.pool, &filters).await?;

    tracing::debug!(
        total = result.total,
        returned = result.units.len(),
        limit = result.limit,
        offset = result.offset,
        "Unit search executed",
    );

    Ok(Json(SearchUnitsResponse {
        units: result.units,
        total: result.total,
        limit: result.limit,
        offset: result.offset,
        applied_filters: filters,
    }))
}
