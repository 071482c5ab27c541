//! Domain-level error type shared across crates.

/// Errors produced by domain logic, independent of any transport.
///
/// The HTTP layer maps these onto status codes; see `rentiq-api`'s
/// `AppError`. Filter violations are deliberately *not* represented here:
/// the validator returns them as data so callers can batch-report every
/// problem at once.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A structurally invalid value reached domain logic.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An invariant was broken; not actionable by the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}
