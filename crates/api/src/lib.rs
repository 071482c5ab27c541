//! HTTP layer: axum handlers, routes, configuration, and the Census client.

pub mod census;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
