//! Unit search executor.
//!
//! Renders a [`QueryPlan`] into SQL with `sqlx::QueryBuilder` (bind order is
//! managed by the builder — no hand-tracked parameter indexes) and runs the
//! two-phase search: a `COUNT(DISTINCT u.id)` phase without sort/pagination,
//! then a page fetch that aggregates each unit's complete feature set and
//! deduplicates by unit identity.

use sqlx::{PgPool, Postgres, QueryBuilder};

use rentiq_core::filters::{SearchFilters, SortKey};
use rentiq_core::query::{Comparison, Predicate, QueryPlan, RangeField, SortDirection};

use crate::models::unit::{SearchResult, UnitRow};

/// Provides unit search over the warehouse.
pub struct UnitRepo;

impl UnitRepo {
    /// Search units matching the given filters.
    ///
    /// Callers are expected to have validated the filters; defaults are
    /// applied by the plan builder. `total` counts every distinct matching
    /// unit regardless of `limit`/`offset`.
    pub async fn search(pool: &PgPool, filters: &SearchFilters) -> Result<SearchResult, sqlx::Error> {
        let plan = QueryPlan::from_filters(filters);
        Self::execute(pool, &plan).await
    }

    /// Run a prepared plan: count phase, then page fetch.
    ///
    /// The phases are independent reads and run sequentially. Store failures
    /// propagate as `sqlx::Error`; no partial result is ever returned.
    pub async fn execute(pool: &PgPool, plan: &QueryPlan) -> Result<SearchResult, sqlx::Error> {
        let mut count_query = build_count_query(plan);
        let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut fetch_query = build_fetch_query(plan);
        let rows: Vec<UnitRow> = fetch_query.build_query_as().fetch_all(pool).await?;

        tracing::debug!(
            total,
            page = rows.len(),
            limit = plan.limit,
            offset = plan.offset,
            "Unit search executed"
        );

        Ok(SearchResult {
            units: rows.into_iter().map(UnitRow::into_unit).collect(),
            total,
            limit: plan.limit,
            offset: plan.offset,
        })
    }
}

// ---------------------------------------------------------------------------
// Plan rendering
// ---------------------------------------------------------------------------

/// Count phase: distinct matching units, no sort or pagination, so the
/// total is invariant under `limit`/`offset`.
fn build_count_query(plan: &QueryPlan) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(DISTINCT u.id) FROM units u");
    push_feature_intersection(&mut qb, &plan.feature_names);
    push_predicates(&mut qb, plan);
    qb
}

/// Fetch phase: same predicates, plus feature aggregation, dedup by unit
/// identity (`GROUP BY u.id`), sort, and pagination.
fn build_fetch_query(plan: &QueryPlan) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT u.id, u.community_id, c.name AS community_name, u.unit_number, \
                u.bedrooms, u.bathrooms::FLOAT8 AS bathrooms, u.square_feet, \
                u.monthly_rent::FLOAT8 AS monthly_rent, u.availability, \
                u.floor_plan, u.photo_urls, u.floor_plan_urls, u.virtual_tour_url, \
                COALESCE(ARRAY_AGG(DISTINCT f.name) FILTER (WHERE f.name IS NOT NULL), \
                         ARRAY[]::TEXT[]) AS features, \
                u.created_at, u.updated_at \
         FROM units u \
         INNER JOIN communities c ON u.community_id = c.id \
         LEFT JOIN unit_features uf ON u.id = uf.unit_id \
         LEFT JOIN features f ON uf.feature_id = f.id",
    );

    push_feature_intersection(&mut qb, &plan.feature_names);
    push_predicates(&mut qb, plan);

    // u.id is the primary key, so grouping by it (plus the joined community
    // name) collapses the feature-join rows to one row per unit.
    qb.push(" GROUP BY u.id, c.name ORDER BY ");
    qb.push(sort_column(plan.sort.key));
    qb.push(match plan.sort.direction {
        SortDirection::Asc => " ASC",
        SortDirection::Desc => " DESC",
    });
    // Stable tiebreak for pagination.
    qb.push(", u.id");

    qb.push(" LIMIT ");
    qb.push_bind(plan.limit);
    qb.push(" OFFSET ");
    qb.push_bind(plan.offset);
    qb
}

/// Append the WHERE clause: community scope plus every plan predicate.
fn push_predicates(qb: &mut QueryBuilder<'static, Postgres>, plan: &QueryPlan) {
    qb.push(" WHERE u.community_id = ANY(");
    qb.push_bind(plan.community_ids.clone());
    qb.push(")");

    for predicate in &plan.predicates {
        match predicate {
            Predicate::Range { field, cmp, value } => {
                qb.push(" AND ");
                qb.push(range_column(*field));
                qb.push(match cmp {
                    Comparison::GreaterOrEqual => " >= ",
                    Comparison::LessOrEqual => " <= ",
                });
                qb.push_bind(*value);
            }
            Predicate::Availability(value) => {
                qb.push(" AND u.availability = ");
                qb.push_bind(*value);
            }
        }
    }
}

/// AND-semantics feature filter: keep units whose association rows cover
/// every requested name. Grouping by unit and comparing the count of
/// *distinct* matched names against the request size makes duplicate
/// association rows harmless. An empty request list appends nothing — no
/// constraint, never "match nothing".
fn push_feature_intersection(qb: &mut QueryBuilder<'static, Postgres>, feature_names: &[String]) {
    if feature_names.is_empty() {
        return;
    }

    qb.push(
        " INNER JOIN (SELECT uf2.unit_id \
          FROM unit_features uf2 \
          INNER JOIN features f2 ON f2.id = uf2.feature_id \
          WHERE f2.name = ANY(",
    );
    qb.push_bind(feature_names.to_vec());
    qb.push(") GROUP BY uf2.unit_id HAVING COUNT(DISTINCT f2.name) = ");
    qb.push_bind(feature_names.len() as i64);
    qb.push(") matching_features ON matching_features.unit_id = u.id");
}

fn range_column(field: RangeField) -> &'static str {
    match field {
        RangeField::Bedrooms => "u.bedrooms",
        RangeField::Bathrooms => "u.bathrooms",
        RangeField::MonthlyRent => "u.monthly_rent",
        RangeField::SquareFeet => "u.square_feet",
    }
}

/// Fixed sort-key mapping. The plan builder already resolved defaults, so
/// every key maps to exactly one column.
fn sort_column(key: SortKey) -> &'static str {
    match key {
        SortKey::CommunityName => "c.name",
        SortKey::UnitNumber => "u.unit_number",
        SortKey::Bedrooms => "u.bedrooms",
        SortKey::Bathrooms => "u.bathrooms",
        SortKey::Price => "u.monthly_rent",
        SortKey::SquareFeet => "u.square_feet",
    }
}
