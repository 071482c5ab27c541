//! Search filters and their validator.
//!
//! `validate_search_filters` is a pure function returning *every* violation
//! as a human-readable message. An empty list means "valid"; callers must not
//! build or execute a query otherwise. Validation never defaults or mutates
//! the input — defaulting happens in the query builder, after validation
//! succeeds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Domain bounds and pagination defaults
// ---------------------------------------------------------------------------

/// Inclusive bedroom-count domain.
pub const BEDROOM_BOUNDS: (f64, f64) = (0.0, 5.0);

/// Inclusive bathroom-count domain (fractional counts allowed).
pub const BATHROOM_BOUNDS: (f64, f64) = (0.0, 4.0);

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size.
pub const MAX_LIMIT: i64 = 1000;

// ---------------------------------------------------------------------------
// Filter types (wire contract — serde names are normative)
// ---------------------------------------------------------------------------

/// A numeric range filter. Absent bounds mean "unbounded on that side",
/// never zero or infinity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RangeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Availability filter. `All` is a sentinel that disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    Available,
    Occupied,
    All,
}

/// Sort keys accepted by unit search. Anything else falls back to
/// community name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CommunityName,
    UnitNumber,
    Bedrooms,
    Bathrooms,
    Price,
    SquareFeet,
}

/// The unit search query contract.
///
/// The search is always scoped: `community_ids` is required and non-empty;
/// there is no "search everything" mode. `features` uses AND semantics — a
/// unit matches only if it carries every requested feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub community_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedroom_range: Option<RangeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathroom_range: Option<RangeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<RangeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_feet_range: Option<RangeFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<AvailabilityFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Validate search filters against domain constraints.
///
/// Returns the full list of violations so the caller can report them all at
/// once. An empty list signals "valid".
pub fn validate_search_filters(filters: &SearchFilters) -> Vec<String> {
    let mut errors = Vec::new();

    if filters.community_ids.is_empty() {
        errors.push("At least one community must be selected".to_string());
    }

    if let Some(range) = &filters.bedroom_range {
        validate_bounded_range(range, "Bedroom", BEDROOM_BOUNDS, &mut errors);
    }

    if let Some(range) = &filters.bathroom_range {
        validate_bounded_range(range, "Bathroom", BATHROOM_BOUNDS, &mut errors);
    }

    if let Some(range) = &filters.price_range {
        validate_positive_range(range, "Price", &mut errors);
    }

    if let Some(range) = &filters.square_feet_range {
        validate_positive_range(range, "Square feet", &mut errors);
    }

    if let Some(limit) = filters.limit {
        if !(1..=MAX_LIMIT).contains(&limit) {
            errors.push(format!("Limit must be between 1 and {MAX_LIMIT}"));
        }
    }

    if let Some(offset) = filters.offset {
        if offset < 0 {
            errors.push("Offset must be non-negative".to_string());
        }
    }

    errors
}

/// Each supplied bound must lie within the domain; min must not exceed max.
fn validate_bounded_range(
    range: &RangeFilter,
    label: &str,
    (lo, hi): (f64, f64),
    errors: &mut Vec<String>,
) {
    if let Some(min) = range.min {
        if min < lo || min > hi {
            errors.push(format!("{label} min must be between {lo} and {hi}"));
        }
    }
    if let Some(max) = range.max {
        if max < lo || max > hi {
            errors.push(format!("{label} max must be between {lo} and {hi}"));
        }
    }
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            errors.push(format!("{label} min cannot exceed max"));
        }
    }
}

/// Each supplied bound must be non-negative; min must not exceed max.
fn validate_positive_range(range: &RangeFilter, label: &str, errors: &mut Vec<String>) {
    if let Some(min) = range.min {
        if min < 0.0 {
            errors.push(format!("{label} min must be positive"));
        }
    }
    if let Some(max) = range.max {
        if max < 0.0 {
            errors.push(format!("{label} max must be positive"));
        }
    }
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            errors.push(format!("{label} min cannot exceed max"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoped() -> SearchFilters {
        SearchFilters {
            community_ids: vec![Uuid::new_v4()],
            ..Default::default()
        }
    }

    // -- community scope -----------------------------------------------------

    #[test]
    fn empty_community_ids_rejected() {
        let errors = validate_search_filters(&SearchFilters::default());
        assert!(errors.contains(&"At least one community must be selected".to_string()));
    }

    #[test]
    fn valid_filters_produce_no_errors() {
        let filters = SearchFilters {
            bedroom_range: Some(RangeFilter {
                min: Some(1.0),
                max: Some(3.0),
            }),
            bathroom_range: Some(RangeFilter {
                min: Some(1.0),
                max: Some(2.0),
            }),
            price_range: Some(RangeFilter {
                min: Some(1000.0),
                max: Some(3000.0),
            }),
            square_feet_range: Some(RangeFilter {
                min: Some(500.0),
                max: Some(2000.0),
            }),
            limit: Some(50),
            offset: Some(0),
            ..scoped()
        };
        assert!(validate_search_filters(&filters).is_empty());
    }

    // -- bedroom / bathroom domains ------------------------------------------

    #[test]
    fn bedroom_min_exceeding_max_rejected() {
        let filters = SearchFilters {
            bedroom_range: Some(RangeFilter {
                min: Some(3.0),
                max: Some(1.0),
            }),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Bedroom min cannot exceed max".to_string()));
    }

    #[test]
    fn bedroom_bound_outside_domain_rejected() {
        let filters = SearchFilters {
            bedroom_range: Some(RangeFilter {
                min: None,
                max: Some(9.0),
            }),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Bedroom max must be between 0 and 5".to_string()));
    }

    #[test]
    fn bathroom_bound_outside_domain_rejected() {
        let filters = SearchFilters {
            bathroom_range: Some(RangeFilter {
                min: Some(-1.0),
                max: None,
            }),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Bathroom min must be between 0 and 4".to_string()));
    }

    #[test]
    fn fractional_bathroom_bounds_accepted() {
        let filters = SearchFilters {
            bathroom_range: Some(RangeFilter {
                min: Some(1.5),
                max: Some(2.5),
            }),
            ..scoped()
        };
        assert!(validate_search_filters(&filters).is_empty());
    }

    // -- price / square feet -------------------------------------------------

    #[test]
    fn negative_price_rejected() {
        let filters = SearchFilters {
            price_range: Some(RangeFilter {
                min: Some(-100.0),
                max: Some(2000.0),
            }),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Price min must be positive".to_string()));
    }

    #[test]
    fn square_feet_min_exceeding_max_rejected() {
        let filters = SearchFilters {
            square_feet_range: Some(RangeFilter {
                min: Some(2000.0),
                max: Some(500.0),
            }),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Square feet min cannot exceed max".to_string()));
    }

    // -- pagination ----------------------------------------------------------

    #[test]
    fn limit_above_max_rejected() {
        let filters = SearchFilters {
            limit: Some(2000),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Limit must be between"));
    }

    #[test]
    fn limit_of_zero_rejected() {
        let filters = SearchFilters {
            limit: Some(0),
            ..scoped()
        };
        assert!(!validate_search_filters(&filters).is_empty());
    }

    #[test]
    fn negative_offset_rejected() {
        let filters = SearchFilters {
            offset: Some(-10),
            ..scoped()
        };
        let errors = validate_search_filters(&filters);
        assert!(errors.contains(&"Offset must be non-negative".to_string()));
    }

    #[test]
    fn multiple_violations_reported_together() {
        let filters = SearchFilters {
            community_ids: vec![],
            limit: Some(0),
            offset: Some(-1),
            ..Default::default()
        };
        assert_eq!(validate_search_filters(&filters).len(), 3);
    }

    // -- wire names ----------------------------------------------------------

    #[test]
    fn filters_deserialize_from_camel_case() {
        let json = r#"{
            "communityIds": ["123e4567-e89b-12d3-a456-426614174000"],
            "squareFeetRange": { "min": 500 },
            "sortBy": "squareFeet",
            "sortOrder": "desc",
            "availability": "available"
        }"#;
        let filters: SearchFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.community_ids.len(), 1);
        assert_eq!(filters.square_feet_range.unwrap().min, Some(500.0));
        assert_eq!(filters.sort_by, Some(SortKey::SquareFeet));
        assert_eq!(filters.availability, Some(AvailabilityFilter::Available));
    }
}
