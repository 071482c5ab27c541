pub mod communities;
pub mod export;
pub mod features;
pub mod health;
pub mod msa;
pub mod units;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /units/search        POST   search units
/// /communities         GET    list communities
/// /communities/{id}    GET    community detail
/// /features            GET    list features with unit counts
/// /msa                 GET    list MSAs
/// /msa/{code}          GET    MSA detail with demographics refresh
/// /export              POST   download filtered units as CSV/JSON
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(units::router())
        .merge(communities::router())
        .merge(features::router())
        .merge(msa::router())
        .merge(export::router())
}
