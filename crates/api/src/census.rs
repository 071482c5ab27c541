//! US Census Bureau API client.
//!
//! Fetches MSA demographics from the American Community Survey (ACS) 5-year
//! dataset. The fetch is skipped entirely when no API key is configured, and
//! callers degrade gracefully to cached data on failure.

use chrono::Datelike;
use serde_json::Value;

use rentiq_core::types::Demographics;

/// ACS variables: total population, median household income, housing units,
/// rental vacancy rate.
const ACS_VARIABLES: &str = "B01003_001E,B19013_001E,B25001_001E,B25004_008E";

const CENSUS_BASE_URL: &str = "https://api.census.gov/data";

/// Client for the Census Bureau ACS API.
pub struct CensusClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl CensusClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch demographics for an MSA code.
    ///
    /// Returns `Ok(None)` when no API key is configured. The most recent
    /// available survey year is typically two years behind the calendar.
    pub async fn fetch_demographics(
        &self,
        msa_code: &str,
    ) -> Result<Option<Demographics>, reqwest::Error> {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("CENSUS_API_KEY not configured, skipping demographic fetch");
            return Ok(None);
        };

        let year = chrono::Utc::now().year() - 2;
        let url = format!(
            "{CENSUS_BASE_URL}/{year}/acs/acs5?get=NAME,{ACS_VARIABLES}\
             &for=metropolitan%20statistical%20area/micropolitan%20statistical%20area:{msa_code}\
             &key={api_key}"
        );

        let body: Value = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_acs_response(&body))
    }
}

/// Parse the Census response, which is an array of arrays:
/// `[[headers...], [NAME, population, income, units, vacancy, code]]`.
/// All values arrive as strings; unparseable cells become `None`.
fn parse_acs_response(body: &Value) -> Option<Demographics> {
    let rows = body.as_array()?;
    let values = rows.get(1)?.as_array()?;

    Some(Demographics {
        population: cell_i64(values, 1),
        median_income: cell_i64(values, 2),
        housing_units: cell_i64(values, 3),
        rental_vacancy_rate: cell_f64(values, 4),
    })
}

fn cell_i64(values: &[Value], index: usize) -> Option<i64> {
    values.get(index)?.as_str()?.parse().ok()
}

fn cell_f64(values: &[Value], index: usize) -> Option<f64> {
    values.get(index)?.as_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_header_plus_value_rows() {
        let body = json!([
            ["NAME", "B01003_001E", "B19013_001E", "B25001_001E", "B25004_008E", "msa"],
            ["Austin-Round Rock, TX Metro Area", "2283371", "86530", "950210", "6.1", "12420"]
        ]);
        let demographics = parse_acs_response(&body).unwrap();
        assert_eq!(demographics.population, Some(2_283_371));
        assert_eq!(demographics.median_income, Some(86_530));
        assert_eq!(demographics.housing_units, Some(950_210));
        assert_eq!(demographics.rental_vacancy_rate, Some(6.1));
    }

    #[test]
    fn missing_value_row_yields_none() {
        let body = json!([["NAME", "B01003_001E"]]);
        assert!(parse_acs_response(&body).is_none());
    }

    #[test]
    fn unparseable_cells_become_none() {
        let body = json!([
            ["NAME", "B01003_001E", "B19013_001E", "B25001_001E", "B25004_008E", "msa"],
            ["Somewhere", "not-a-number", "", "12", "n/a", "00000"]
        ]);
        let demographics = parse_acs_response(&body).unwrap();
        assert_eq!(demographics.population, None);
        assert_eq!(demographics.median_income, None);
        assert_eq!(demographics.housing_units, Some(12));
        assert_eq!(demographics.rental_vacancy_rate, None);
    }

    #[test]
    fn non_array_body_yields_none() {
        assert!(parse_acs_response(&json!({"error": "bad key"})).is_none());
    }
}
