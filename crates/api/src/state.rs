use std::sync::Arc;

use crate::census::CensusClient;
use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: rentiq_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Census Bureau API client for MSA demographics refresh.
    pub census: Arc<CensusClient>,
}
