//! Handler for unit export downloads.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use rentiq_core::error::CoreError;
use rentiq_core::export::{export_units, ExportFormat};
use rentiq_core::filters::{validate_search_filters, SearchFilters};
use rentiq_db::repositories::UnitRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/v1/export`.
///
/// Carries the same filters as a search, plus the output format and an
/// optional column selection for CSV.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// CSV column subset, in the caller's order. Ignored for JSON.
    pub fields: Option<Vec<String>>,
    #[serde(flatten)]
    pub filters: SearchFilters,
}

/// POST /api/v1/export
///
/// Runs a search with the supplied filters and streams the result back as a
/// CSV or JSON attachment. A requested limit over the configured record cap
/// is rejected before any store access, never truncated silently.
pub async fn export_units_handler(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> AppResult<Response> {
    let violations = validate_search_filters(&request.filters);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let max = state.config.export_max_records;
    if let Some(limit) = request.filters.limit {
        if limit > max {
            return Err(AppError::ExportLimitExceeded { max });
        }
    }

    // Exports walk the full result set from the first row, capped.
    let mut filters = request.filters.clone();
    filters.limit = Some(filters.limit.unwrap_or(max).min(max));
    filters.offset = Some(0);

    let result = UnitRepo::search(&state.pool, &filters).await?;

    let payload = export_units(&result.units, request.format, request.fields.as_deref())
        .map_err(|err| AppError::Core(CoreError::Internal(err.to_string())))?;

    tracing::info!(
        records = result.units.len(),
        format = ?request.format,
        file_name = %payload.file_name,
        "Units exported",
    );

    let response = Response::builder()
        .header(header::CONTENT_TYPE, payload.mime_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", payload.file_name),
        )
        .body(axum::body::Body::from(payload.data))
        .map_err(|err| AppError::Core(CoreError::Internal(err.to_string())))?;

    Ok(response.into_response())
}
