use axum::routing::get;
use axum::Router;

use crate::handlers::features;
use crate::state::AppState;

/// Feature routes mounted at `/features`.
pub fn router() -> Router<AppState> {
    Router::new().route("/features", get(features::list_features))
}
