use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw reading as extracted from a report, before any normalization.
///
/// `value` is kept verbatim: it may carry `<`/`>` prefixes ("<5") or
/// non-numeric text ("Negative"). `flag` is the provider's own severity
/// marker and is informational only; classification always derives from the
/// canonical optimal range, never from this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReading {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub ref_range: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

/// Report-level metadata returned by the structuring extraction.
/// Dates are kept as printed; use the typed accessors for parsed values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMetadata {
    #[serde(default)]
    pub collection_date: Option<String>,
    #[serde(default)]
    pub received_date: Option<String>,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
}

impl ExtractionMetadata {
    pub fn parsed_collection_date(&self) -> Option<NaiveDate> {
        parse_report_date(self.collection_date.as_deref()?)
    }

    pub fn parsed_received_date(&self) -> Option<NaiveDate> {
        parse_report_date(self.received_date.as_deref()?)
    }

    pub fn parsed_report_date(&self) -> Option<NaiveDate> {
        parse_report_date(self.report_date.as_deref()?)
    }
}

/// Parse the date formats labs actually print: ISO, US slash, and
/// long-month forms.
fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%B %d, %Y", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    None
}

/// The full structured payload produced by the structuring extraction:
/// report metadata plus the ordered list of raw readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionPayload {
    #[serde(flatten)]
    pub metadata: ExtractionMetadata,
    pub biomarkers: Vec<RawReading>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_lab_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for raw in ["2024-03-05", "03/05/2024", "3/5/24", "March 5, 2024"] {
            assert_eq!(parse_report_date(raw), Some(expected), "format: {raw}");
        }
        assert_eq!(parse_report_date("not a date"), None);
    }

    #[test]
    fn payload_accepts_minimal_reading() {
        let json = r#"{"biomarkers":[{"name":"Glucose","value":"90"}]}"#;
        let payload: ExtractionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.biomarkers.len(), 1);
        assert_eq!(payload.biomarkers[0].name, "Glucose");
        assert!(payload.biomarkers[0].unit.is_none());
        assert!(payload.metadata.patient_name.is_none());
    }
}
