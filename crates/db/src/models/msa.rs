//! MSA row model.

use sqlx::FromRow;
use uuid::Uuid;

use rentiq_core::types::{Msa, Timestamp};

/// An MSA row, optionally carrying a derived community count.
#[derive(Debug, Clone, FromRow)]
pub struct MsaRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub state: String,
    pub population: Option<i64>,
    pub median_income: Option<i64>,
    pub housing_units: Option<i64>,
    pub rental_vacancy_rate: Option<f64>,
    #[sqlx(default)]
    pub community_count: Option<i64>,
    pub last_updated: Option<Timestamp>,
}

impl MsaRow {
    pub fn into_msa(self) -> Msa {
        Msa {
            id: self.id,
            code: self.code,
            name: self.name,
            state: self.state,
            population: self.population,
            median_income: self.median_income,
            housing_units: self.housing_units,
            rental_vacancy_rate: self.rental_vacancy_rate,
            community_count: self.community_count,
            last_updated: self.last_updated,
        }
    }
}
