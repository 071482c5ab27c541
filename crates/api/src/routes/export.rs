use axum::routing::post;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes mounted at `/export`.
pub fn router() -> Router<AppState> {
    Router::new().route("/export", post(export::export_units_handler))
}
