//! Domain logic for the unit search and comparison platform.
//!
//! This crate is pure: no database, no HTTP, no I/O. It holds the domain
//! models, the search-filter validator, the query-plan builder, and the
//! export formatter. The `db` crate renders query plans into SQL and the
//! `api` crate wires everything to HTTP.

pub mod error;
pub mod export;
pub mod filters;
pub mod query;
pub mod types;
