//! Domain models and shared type aliases.
//!
//! Field names serialize in camelCase — these structs are the wire contract
//! shared with the frontend, so the serde names are normative.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Unit
// ---------------------------------------------------------------------------

/// Occupancy state of a unit row in the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Occupied,
    Offline,
}

impl Availability {
    /// The value stored in the `units.availability` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Occupied => "occupied",
            Availability::Offline => "offline",
        }
    }
}

/// An individual apartment/space within a community.
///
/// Reconstructed fresh from warehouse rows on every query and never mutated
/// after construction. `features` holds the unit's *complete* feature-name
/// set (deduplicated), not just whatever subset a search requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Uuid,
    pub community_id: Uuid,
    pub community_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    pub bedrooms: i32,
    /// Fractional counts exist (e.g. 1.5 baths).
    pub bathrooms: f64,
    pub square_feet: i32,
    pub monthly_rent: f64,
    pub features: Vec<String>,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_plan_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_tour_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Community
// ---------------------------------------------------------------------------

/// Street address of a community.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A multifamily property/complex owning many units.
///
/// `total_units` is served from the stored column; there is no live-count
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub msa_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msa_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub total_units: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_units: Option<i32>,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

/// A named amenity/attribute a unit can carry.
///
/// `unit_count` is always computed from the current unit/feature join, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub unit_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

// ---------------------------------------------------------------------------
// MSA
// ---------------------------------------------------------------------------

/// Metro Statistical Area with cached Census demographics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Msa {
    pub id: Uuid,
    /// Census Bureau MSA code.
    pub code: String,
    pub name: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_income: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing_units: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_vacancy_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}

/// Demographic variables fetched from the Census Bureau ACS 5-year survey.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub population: Option<i64>,
    pub median_income: Option<i64>,
    pub housing_units: Option<i64>,
    pub rental_vacancy_rate: Option<f64>,
}
