//! Community row model.

use sqlx::FromRow;
use uuid::Uuid;

use rentiq_core::types::{Address, Community, Location, Timestamp};

/// A community row joined with its MSA name.
#[derive(Debug, Clone, FromRow)]
pub struct CommunityRow {
    pub id: Uuid,
    pub name: String,
    pub msa_id: Uuid,
    pub msa_name: Option<String>,
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_units: i32,
    pub available_units: Option<i32>,
    pub amenities: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CommunityRow {
    /// Map a raw row into the domain `Community` shape.
    ///
    /// `total_units` comes from the stored column only; there is no live
    /// unit-count fallback.
    pub fn into_community(self) -> Community {
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Community {
            id: self.id,
            name: self.name,
            msa_id: self.msa_id,
            msa_name: self.msa_name,
            address: Some(Address {
                street: self.street,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
            }),
            location,
            total_units: self.total_units,
            available_units: self.available_units,
            amenities: self.amenities,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
