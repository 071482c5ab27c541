//! Repository for communities (multifamily properties).

use sqlx::PgPool;
use uuid::Uuid;

use rentiq_core::types::Community;

use crate::models::community::CommunityRow;

/// Column list shared by community queries.
const COMMUNITY_COLUMNS: &str = "\
    c.id, c.name, c.msa_id, m.name AS msa_name, \
    c.street, c.city, c.state, c.zip_code, \
    c.latitude, c.longitude, c.total_units, c.available_units, \
    c.amenities, c.created_at, c.updated_at";

/// Provides read access to communities.
pub struct CommunityRepo;

impl CommunityRepo {
    /// List communities with an optional MSA scope, paginated.
    ///
    /// Returns the page plus the total count of matching communities; the
    /// count ignores pagination so callers can build a correct pager.
    pub async fn list(
        pool: &PgPool,
        msa_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Community>, i64), sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM communities c \
             WHERE ($1::UUID IS NULL OR c.msa_id = $1)",
        )
        .bind(msa_id)
        .fetch_one(pool)
        .await?;

        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} \
             FROM communities c \
             LEFT JOIN msas m ON c.msa_id = m.id \
             WHERE ($1::UUID IS NULL OR c.msa_id = $1) \
             ORDER BY c.name, c.id \
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, CommunityRow>(&sql)
            .bind(msa_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok((
            rows.into_iter().map(CommunityRow::into_community).collect(),
            total,
        ))
    }

    /// Find a community by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Community>, sqlx::Error> {
        let sql = format!(
            "SELECT {COMMUNITY_COLUMNS} \
             FROM communities c \
             LEFT JOIN msas m ON c.msa_id = m.id \
             WHERE c.id = $1"
        );

        let row = sqlx::query_as::<_, CommunityRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(CommunityRow::into_community))
    }
}
