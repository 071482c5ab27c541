//! Feature row model.

use sqlx::FromRow;
use uuid::Uuid;

use rentiq_core::types::Feature;

/// A feature row with its computed usage count.
///
/// `unit_count` is derived at query time (`COUNT(DISTINCT uf.unit_id)`) so
/// it always reflects the current unit/feature join.
#[derive(Debug, Clone, FromRow)]
pub struct FeatureRow {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_popular: bool,
    pub unit_count: i64,
}

impl FeatureRow {
    pub fn into_feature(self) -> Feature {
        Feature {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            unit_count: self.unit_count,
            is_popular: Some(self.is_popular),
        }
    }
}
