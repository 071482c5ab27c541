//! Handlers for MSA listing and demographics.
//!
//! MSA demographics come from the Census Bureau and are cached in the store.
//! A lookup refreshes the cache when it is older than a year (or when the
//! caller forces it); refresh failures fall back to the cached row.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use rentiq_core::error::CoreError;
use rentiq_core::types::Msa;
use rentiq_db::repositories::MsaRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Cached demographics older than this are refetched on lookup.
const DEMOGRAPHICS_MAX_AGE_DAYS: i64 = 365;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMsasResponse {
    pub msas: Vec<Msa>,
}

/// GET /api/v1/msa
///
/// Lists all MSAs with their community counts.
pub async fn list_msas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let msas = MsaRepo::list(&state.pool).await?;

    Ok(Json(ListMsasResponse { msas }))
}

/// Query parameters for `GET /api/v1/msa/{code}`.
#[derive(Deserialize)]
pub struct GetMsaParams {
    /// Force a demographics refresh regardless of cache age.
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/v1/msa/{code}
///
/// Returns one MSA by Census code, refreshing stale demographics first.
pub async fn get_msa(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<GetMsaParams>,
) -> AppResult<impl IntoResponse> {
    let msa = MsaRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Msa",
            id: code.clone(),
        }))?;

    if params.refresh || is_stale(&msa) {
        match state.census.fetch_demographics(&msa.code).await {
            Ok(Some(demographics)) => {
                MsaRepo::update_demographics(&state.pool, &msa.code, &demographics).await?;
                let refreshed = MsaRepo::find_by_code(&state.pool, &msa.code)
                    .await?
                    .unwrap_or(msa);
                return Ok(Json(refreshed));
            }
            Ok(None) => {}
            // Serve cached data when the Census API is unreachable.
            Err(err) => {
                tracing::warn!(
                    msa_code = %msa.code,
                    error = %err,
                    "Demographics refresh failed, serving cached data",
                );
            }
        }
    }

    Ok(Json(msa))
}

fn is_stale(msa: &Msa) -> bool {
    match msa.last_updated {
        Some(last_updated) => {
            let age = chrono::Utc::now() - last_updated;
            age.num_days() >= DEMOGRAPHICS_MAX_AGE_DAYS
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn msa_updated_days_ago(days: i64) -> Msa {
        Msa {
            id: Uuid::new_v4(),
            code: "12420".into(),
            name: "Austin-Round Rock".into(),
            state: "TX".into(),
            population: None,
            median_income: None,
            housing_units: None,
            rental_vacancy_rate: None,
            community_count: None,
            last_updated: Some(chrono::Utc::now() - Duration::days(days)),
        }
    }

    #[test]
    fn fresh_demographics_are_not_stale() {
        assert!(!is_stale(&msa_updated_days_ago(30)));
    }

    #[test]
    fn year_old_demographics_are_stale() {
        assert!(is_stale(&msa_updated_days_ago(365)));
        assert!(is_stale(&msa_updated_days_ago(400)));
    }

    #[test]
    fn never_fetched_demographics_are_stale() {
        let mut msa = msa_updated_days_ago(0);
        msa.last_updated = None;
        assert!(is_stale(&msa));
    }
}
