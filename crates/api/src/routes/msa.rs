use axum::routing::get;
use axum::Router;

use crate::handlers::msa;
use crate::state::AppState;

/// MSA routes mounted at `/msa`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/msa", get(msa::list_msas))
        .route("/msa/{code}", get(msa::get_msa))
}
