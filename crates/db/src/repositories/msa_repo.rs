//! Repository for Metro Statistical Areas and their cached demographics.

use sqlx::PgPool;

use rentiq_core::types::{Demographics, Msa};

use crate::models::msa::MsaRow;

/// Provides read access to MSAs plus the demographics refresh write.
pub struct MsaRepo;

impl MsaRepo {
    /// List all MSAs with per-MSA community counts, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Msa>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MsaRow>(
            "SELECT m.id, m.code, m.name, m.state, m.population, m.median_income, \
                    m.housing_units, m.rental_vacancy_rate, m.last_updated, \
                    COUNT(DISTINCT c.id) AS community_count \
             FROM msas m \
             LEFT JOIN communities c ON m.id = c.msa_id \
             GROUP BY m.id \
             ORDER BY m.name ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(MsaRow::into_msa).collect())
    }

    /// Find an MSA by its Census Bureau code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Msa>, sqlx::Error> {
        let row = sqlx::query_as::<_, MsaRow>(
            "SELECT id, code, name, state, population, median_income, \
                    housing_units, rental_vacancy_rate, last_updated \
             FROM msas \
             WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(MsaRow::into_msa))
    }

    /// Persist freshly fetched Census demographics for an MSA.
    pub async fn update_demographics(
        pool: &PgPool,
        code: &str,
        demographics: &Demographics,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE msas \
             SET population = $2, \
                 median_income = $3, \
                 housing_units = $4, \
                 rental_vacancy_rate = $5, \
                 last_updated = NOW() \
             WHERE code = $1",
        )
        .bind(code)
        .bind(demographics.population)
        .bind(demographics.median_income)
        .bind(demographics.housing_units)
        .bind(demographics.rental_vacancy_rate)
        .execute(pool)
        .await?;
        Ok(())
    }
}
