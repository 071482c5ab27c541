//! Unit row model and search result shape.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use rentiq_core::types::{Availability, Timestamp, Unit};

/// A unit row as returned by the search fetch phase: one row per unit, with
/// the unit's complete feature-name set aggregated into `features` via
/// `ARRAY_AGG(DISTINCT ...)`.
#[derive(Debug, Clone, FromRow)]
pub struct UnitRow {
    pub id: Uuid,
    pub community_id: Uuid,
    pub community_name: String,
    pub unit_number: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
    pub monthly_rent: f64,
    pub availability: String,
    pub floor_plan: Option<String>,
    pub photo_urls: Option<Vec<String>>,
    pub floor_plan_urls: Option<Vec<String>>,
    pub virtual_tour_url: Option<String>,
    pub features: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UnitRow {
    /// Map a raw row into the domain `Unit` shape.
    pub fn into_unit(self) -> Unit {
        Unit {
            id: self.id,
            community_id: self.community_id,
            community_name: self.community_name,
            unit_number: self.unit_number,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            monthly_rent: self.monthly_rent,
            features: self.features,
            availability: parse_availability(&self.availability),
            floor_plan: self.floor_plan,
            photo_urls: self.photo_urls,
            floor_plan_urls: self.floor_plan_urls,
            virtual_tour_url: self.virtual_tour_url,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

/// The `availability` column carries a CHECK constraint, so anything else
/// indicates schema drift; treat it as offline rather than failing the row.
fn parse_availability(value: &str) -> Availability {
    match value {
        "available" => Availability::Available,
        "occupied" => Availability::Occupied,
        _ => Availability::Offline,
    }
}

/// A paginated unit search result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub units: Vec<Unit>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_values_parse() {
        assert_eq!(parse_availability("available"), Availability::Available);
        assert_eq!(parse_availability("occupied"), Availability::Occupied);
        assert_eq!(parse_availability("offline"), Availability::Offline);
        assert_eq!(parse_availability("unknown"), Availability::Offline);
    }
}
