use axum::routing::get;
use axum::Router;

use crate::handlers::communities;
use crate::state::AppState;

/// Community routes mounted at `/communities`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/communities", get(communities::list_communities))
        .route("/communities/{id}", get(communities::get_community))
}
