//! Repository for features/amenities.

use sqlx::PgPool;
use uuid::Uuid;

use rentiq_core::types::Feature;

use crate::models::feature::FeatureRow;

/// Provides read access to features and their usage statistics.
pub struct FeatureRepo;

impl FeatureRepo {
    /// List features with computed usage counts, optionally scoped to a
    /// community.
    ///
    /// `unit_count` is `COUNT(DISTINCT uf.unit_id)` over the current join,
    /// so it always reflects live assignments. When scoped, only features
    /// carried by at least one unit in that community are returned.
    pub async fn list(
        pool: &PgPool,
        community_id: Option<Uuid>,
    ) -> Result<Vec<Feature>, sqlx::Error> {
        let rows = sqlx::query_as::<_, FeatureRow>(
            "SELECT f.id, f.name, f.category, f.description, f.is_popular, \
                    COUNT(DISTINCT uf.unit_id) AS unit_count \
             FROM features f \
             LEFT JOIN unit_features uf ON f.id = uf.feature_id \
             LEFT JOIN units u ON uf.unit_id = u.id \
             WHERE ($1::UUID IS NULL OR u.community_id = $1) \
             GROUP BY f.id, f.name, f.category, f.description, f.is_popular \
             ORDER BY unit_count DESC, f.name ASC",
        )
        .bind(community_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(FeatureRow::into_feature).collect())
    }
}
