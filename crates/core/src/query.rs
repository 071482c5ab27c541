//! Query-plan builder for unit search.
//!
//! Translates validated [`SearchFilters`] into a typed, ordered plan: a list
//! of predicate descriptors, an optional feature-intersection constraint, a
//! sort specification, and pagination bounds. The `db` crate renders the plan
//! into SQL in a single translation step, so parameter indexes are never
//! tracked by hand.

use serde::Serialize;
use uuid::Uuid;

use crate::filters::{AvailabilityFilter, SearchFilters, SortKey, DEFAULT_LIMIT};

// ---------------------------------------------------------------------------
// Plan types
// ---------------------------------------------------------------------------

/// Inequality direction for a range predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparison {
    GreaterOrEqual,
    LessOrEqual,
}

/// The unit attribute a range predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeField {
    Bedrooms,
    Bathrooms,
    MonthlyRent,
    SquareFeet,
}

/// A single filter predicate. Predicates combine with AND.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// `field <cmp> value` for one of the four numeric unit attributes.
    Range {
        field: RangeField,
        cmp: Comparison,
        value: f64,
    },
    /// Exact availability match. Never emitted for the `all` sentinel.
    Availability(&'static str),
}

/// Sort direction. Defaults to ascending; only the literal value `"desc"`
/// (case-insensitive) selects descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Resolved sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// A complete, store-agnostic retrieval plan for one unit search.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPlan {
    /// Community membership — always present; the search is always scoped.
    pub community_ids: Vec<Uuid>,
    /// Ordered range/availability predicates, one per supplied bound.
    pub predicates: Vec<Predicate>,
    /// Feature names the unit must *all* carry. Empty means no feature
    /// constraint (never "match nothing").
    pub feature_names: Vec<String>,
    pub sort: SortSpec,
    pub limit: i64,
    pub offset: i64,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

impl QueryPlan {
    /// Build a plan from validated filters, applying defaults.
    ///
    /// Callers must run `validate_search_filters` first; this function
    /// clamps pagination defensively but does not re-validate ranges.
    pub fn from_filters(filters: &SearchFilters) -> QueryPlan {
        let mut predicates = Vec::new();

        push_range(
            &mut predicates,
            RangeField::Bedrooms,
            filters.bedroom_range.as_ref(),
        );
        push_range(
            &mut predicates,
            RangeField::Bathrooms,
            filters.bathroom_range.as_ref(),
        );
        push_range(
            &mut predicates,
            RangeField::MonthlyRent,
            filters.price_range.as_ref(),
        );
        push_range(
            &mut predicates,
            RangeField::SquareFeet,
            filters.square_feet_range.as_ref(),
        );

        match filters.availability {
            Some(AvailabilityFilter::Available) => {
                predicates.push(Predicate::Availability("available"));
            }
            Some(AvailabilityFilter::Occupied) => {
                predicates.push(Predicate::Availability("occupied"));
            }
            // `all` is a sentinel: no predicate.
            Some(AvailabilityFilter::All) | None => {}
        }

        QueryPlan {
            community_ids: filters.community_ids.clone(),
            predicates,
            feature_names: filters.features.clone().unwrap_or_default(),
            sort: SortSpec {
                key: filters.sort_by.unwrap_or(SortKey::CommunityName),
                direction: resolve_direction(filters.sort_order.as_deref()),
            },
            limit: clamp_limit(filters.limit, DEFAULT_LIMIT),
            offset: clamp_offset(filters.offset),
        }
    }
}

/// Emit zero, one, or two inequality predicates for a range filter.
///
/// An absent bound means "unbounded on that side" — a missing min is never
/// treated as 0.
fn push_range(
    predicates: &mut Vec<Predicate>,
    field: RangeField,
    range: Option<&crate::filters::RangeFilter>,
) {
    let Some(range) = range else { return };
    if let Some(min) = range.min {
        predicates.push(Predicate::Range {
            field,
            cmp: Comparison::GreaterOrEqual,
            value: min,
        });
    }
    if let Some(max) = range.max {
        predicates.push(Predicate::Range {
            field,
            cmp: Comparison::LessOrEqual,
            value: max,
        });
    }
}

fn resolve_direction(sort_order: Option<&str>) -> SortDirection {
    match sort_order {
        Some(order) if order.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    }
}

// ---------------------------------------------------------------------------
// Pagination clamps
// ---------------------------------------------------------------------------

/// Floor an optional limit at 1, falling back to `default`.
///
/// The upper bound is a request-validation concern, not a plan concern: the
/// export path legitimately runs with limits above the interactive maximum.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(1)
}

/// Clamp an optional offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
