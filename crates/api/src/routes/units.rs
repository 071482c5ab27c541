use axum::routing::post;
use axum::Router;

use crate::handlers::units;
use crate::state::AppState;

/// Unit routes mounted at `/units`.
pub fn router() -> Router<AppState> {
    Router::new().route("/units/search", post(units::search_units))
}
