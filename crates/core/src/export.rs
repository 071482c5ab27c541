//! Export formatting for unit result sets.
//!
//! Turns a search result into downloadable bytes: JSON serializes the unit
//! list verbatim; CSV selects a subset of named export fields in a fixed
//! display order, applies field formatters (currency for rent, `"; "`-joined
//! feature list), and escapes values per RFC 4180.

use serde::Deserialize;

use crate::types::Unit;

/// Output kind for an export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// A formatted export: bytes plus download metadata.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub data: String,
    pub file_name: String,
    pub mime_type: &'static str,
}

/// Exportable fields in display order. CSV headers are these names.
pub const EXPORT_FIELDS: &[&str] = &[
    "Community",
    "Unit Number",
    "Bedrooms",
    "Bathrooms",
    "Square Feet",
    "Monthly Rent",
    "Availability",
    "Features",
    "Floor Plan",
    "Virtual Tour",
];

/// Format a unit list for download.
///
/// `fields` narrows the CSV columns (ignored for JSON); `None` or an empty
/// list selects every field in [`EXPORT_FIELDS`] order. The file name is
/// date-stamped: `units-export-YYYY-MM-DD.csv`.
pub fn export_units(
    units: &[Unit],
    format: ExportFormat,
    fields: Option<&[String]>,
) -> Result<ExportPayload, serde_json::Error> {
    let data = match format {
        ExportFormat::Csv => generate_csv(units, fields),
        ExportFormat::Json => serde_json::to_string_pretty(units)?,
    };

    let date = chrono::Utc::now().format("%Y-%m-%d");
    Ok(ExportPayload {
        data,
        file_name: format!("units-export-{date}.{}", format.extension()),
        mime_type: format.mime_type(),
    })
}

// ---------------------------------------------------------------------------
// CSV generation
// ---------------------------------------------------------------------------

/// Generate CSV from a unit list.
///
/// An empty unit list yields an empty string — no header row. Unknown field
/// names keep their header column but render empty cells.
pub fn generate_csv(units: &[Unit], fields: Option<&[String]>) -> String {
    if units.is_empty() {
        return String::new();
    }

    let selected: Vec<&str> = match fields {
        Some(fields) if !fields.is_empty() => fields.iter().map(String::as_str).collect(),
        _ => EXPORT_FIELDS.to_vec(),
    };

    let mut out = String::new();
    out.push_str(&selected.join(","));

    for unit in units {
        out.push('\n');
        let row: Vec<String> = selected
            .iter()
            .map(|field| escape_csv_field(&field_value(unit, field)))
            .collect();
        out.push_str(&row.join(","));
    }

    out
}

/// Render one export field of a unit as display text.
fn field_value(unit: &Unit, field: &str) -> String {
    match field {
        "Community" => unit.community_name.clone(),
        "Unit Number" => unit.unit_number.clone().unwrap_or_default(),
        "Bedrooms" => unit.bedrooms.to_string(),
        "Bathrooms" => unit.bathrooms.to_string(),
        "Square Feet" => unit.square_feet.to_string(),
        "Monthly Rent" => format!("${:.2}", unit.monthly_rent),
        "Availability" => unit.availability.as_str().to_string(),
        "Features" => unit.features.join("; "),
        "Floor Plan" => unit.floor_plan.clone().unwrap_or_default(),
        "Virtual Tour" => unit.virtual_tour_url.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Escape a CSV field: values containing a comma, quote, or newline are
/// wrapped in quotes with embedded quotes doubled.
fn escape_csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Availability;
    use uuid::Uuid;

    fn unit(rent: f64, features: Vec<&str>) -> Unit {
        Unit {
            id: Uuid::new_v4(),
            community_id: Uuid::new_v4(),
            community_name: "Maple Court".into(),
            unit_number: Some("A-101".into()),
            bedrooms: 2,
            bathrooms: 1.5,
            square_feet: 940,
            monthly_rent: rent,
            features: features.into_iter().map(String::from).collect(),
            availability: Availability::Available,
            floor_plan: None,
            photo_urls: None,
            floor_plan_urls: None,
            virtual_tour_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    // -- empty list ----------------------------------------------------------

    #[test]
    fn empty_unit_list_yields_empty_string() {
        assert_eq!(generate_csv(&[], None), "");
    }

    // -- formatters ----------------------------------------------------------

    #[test]
    fn rent_formatted_as_currency() {
        let csv = generate_csv(&[unit(1234.5, vec![])], None);
        assert!(csv.contains("$1234.50"), "csv: {csv}");
    }

    #[test]
    fn features_joined_with_semicolons() {
        let csv = generate_csv(&[unit(900.0, vec!["Dishwasher", "Balcony"])], None);
        assert!(csv.contains("Dishwasher; Balcony"), "csv: {csv}");
    }

    // -- escaping ------------------------------------------------------------

    #[test]
    fn feature_containing_comma_is_quoted() {
        let csv = generate_csv(
            &[unit(900.0, vec!["Washer, Dryer"])],
            Some(&["Features".to_string()]),
        );
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Features"));
        assert_eq!(lines.next(), Some("\"Washer, Dryer\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(escape_csv_field("6\" trim"), "\"6\"\" trim\"");
    }

    #[test]
    fn plain_values_left_unquoted() {
        assert_eq!(escape_csv_field("Balcony"), "Balcony");
    }

    // -- field selection -----------------------------------------------------

    #[test]
    fn header_uses_all_fields_by_default() {
        let csv = generate_csv(&[unit(900.0, vec![])], None);
        assert_eq!(csv.lines().next().unwrap(), EXPORT_FIELDS.join(","));
    }

    #[test]
    fn selected_fields_preserve_requested_order() {
        let fields = vec!["Monthly Rent".to_string(), "Community".to_string()];
        let csv = generate_csv(&[unit(900.0, vec![])], Some(&fields));
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Monthly Rent,Community"));
        assert_eq!(lines.next(), Some("$900.00,Maple Court"));
    }

    #[test]
    fn unknown_field_renders_empty_cell() {
        let fields = vec!["Community".to_string(), "Bogus".to_string()];
        let csv = generate_csv(&[unit(900.0, vec![])], Some(&fields));
        assert_eq!(csv.lines().nth(1), Some("Maple Court,"));
    }

    // -- JSON ----------------------------------------------------------------

    #[test]
    fn json_export_round_trips() {
        let units = vec![unit(1850.0, vec!["Dishwasher"]), unit(2100.0, vec![])];
        let payload = export_units(&units, ExportFormat::Json, None).unwrap();
        assert_eq!(payload.mime_type, "application/json");

        let parsed: Vec<Unit> = serde_json::from_str(&payload.data).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, units[0].id);
        assert_eq!(parsed[0].monthly_rent, 1850.0);
        assert_eq!(parsed[0].features, vec!["Dishwasher"]);
    }

    #[test]
    fn file_name_is_date_stamped() {
        let payload = export_units(&[], ExportFormat::Csv, None).unwrap();
        assert!(payload.file_name.starts_with("units-export-"));
        assert!(payload.file_name.ends_with(".csv"));
        assert_eq!(payload.data, "");
    }
}
