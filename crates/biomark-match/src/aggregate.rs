//! Per-batch aggregation of match, normalization and classification output.

use biomark_model::{LabProvider, MatchResult, MatchStats, RawReading};

use crate::flag::calculate_flag;
use crate::matcher::match_reading_name;
use crate::reference::Reference;
use crate::value::parse_numeric_value;

/// Result of aggregating one batch of readings.
#[derive(Debug, Clone)]
pub struct Aggregate {
    /// One entry per input reading, in input order.
    pub results: Vec<MatchResult>,
    pub stats: MatchStats,
    pub unmatched_names: Vec<String>,
}

/// Run the full matcher → normalizer → classifier sequence over a batch.
///
/// Every reading yields exactly one [`MatchResult`]; an unmatched or
/// non-numeric reading is data, not an error. `calculated_flag` is only
/// populated when the reading both matched the catalog and parsed to a
/// number.
pub fn aggregate_readings<R: Reference + ?Sized>(
    readings: &[RawReading],
    provider: LabProvider,
    reference: &R,
) -> Aggregate {
    let mut results = Vec::with_capacity(readings.len());
    let mut unmatched_names = Vec::new();

    for reading in readings {
        let name_match = match_reading_name(&reading.name, provider, reference);
        let numeric_value = parse_numeric_value(&reading.value);
        let calculated_flag = match (&name_match.catalog_match, numeric_value) {
            (Some(hit), Some(value)) => calculate_flag(value, hit.optimal_low, hit.optimal_high),
            _ => None,
        };
        if name_match.catalog_match.is_none() {
            unmatched_names.push(reading.name.clone());
        }
        results.push(MatchResult {
            reading: reading.clone(),
            catalog_match: name_match.catalog_match,
            matched_via: name_match.matched_via,
            confidence: name_match.confidence,
            numeric_value,
            calculated_flag,
        });
    }

    let total = results.len();
    let matched = results.iter().filter(|r| r.catalog_match.is_some()).count();
    let stats = MatchStats {
        total,
        matched,
        unmatched: total - matched,
        match_rate: format_match_rate(matched, total),
    };

    Aggregate {
        results,
        stats,
        unmatched_names,
    }
}

/// Format the share of matched readings as a percentage with one decimal.
/// An empty batch reports `"0.0%"` rather than dividing by zero.
pub fn format_match_rate(matched: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", matched as f64 / total as f64 * 100.0)
}
