//! Row models.
//!
//! Each submodule contains `FromRow` structs matching query result shapes
//! plus the mapping into the `rentiq-core` domain types. Domain structs stay
//! in core so the formatter and HTTP layer never depend on sqlx.

pub mod community;
pub mod feature;
pub mod msa;
pub mod unit;
