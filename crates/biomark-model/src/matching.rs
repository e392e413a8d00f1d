use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BiomarkerId, CatalogEntry, RawReading};

/// How a reading was matched to the catalog.
///
/// Ordered: `Exact > Fuzzy > None`. The matcher stops at the first strategy
/// that succeeds, so a result's confidence reflects the strongest strategy
/// that applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Fuzzy,
    Exact,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Confidence::Exact => "exact",
            Confidence::Fuzzy => "fuzzy",
            Confidence::None => "none",
        };
        f.write_str(text)
    }
}

/// Severity classification of a numeric value against the optimal range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    CriticalLow,
    Low,
    Optimal,
    High,
    CriticalHigh,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::CriticalLow => "CRITICAL_LOW",
            Flag::Low => "LOW",
            Flag::Optimal => "OPTIMAL",
            Flag::High => "HIGH",
            Flag::CriticalHigh => "CRITICAL_HIGH",
        }
    }

    /// True for the two bands outside the critical thresholds.
    pub fn is_critical(&self) -> bool {
        matches!(self, Flag::CriticalLow | Flag::CriticalHigh)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the matched catalog entry carried inside a [`MatchResult`].
///
/// A copy rather than a reference so results stay self-contained after the
/// reference snapshot is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogHit {
    pub id: BiomarkerId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub default_unit: Option<String>,
    pub optimal_low: Option<f64>,
    pub optimal_high: Option<f64>,
}

impl From<&CatalogEntry> for CatalogHit {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            code: entry.code.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            default_unit: entry.default_unit.clone(),
            optimal_low: entry.optimal_low,
            optimal_high: entry.optimal_high,
        }
    }
}

/// Outcome of matching and classifying one raw reading.
///
/// Exactly one per input reading, in input order. An unmatched reading is a
/// valid result with `confidence == None`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub reading: RawReading,
    pub catalog_match: Option<CatalogHit>,
    /// Human-readable provenance, e.g. `alias: "Testosterone, Total"`.
    pub matched_via: Option<String>,
    pub confidence: Confidence,
    pub numeric_value: Option<f64>,
    pub calculated_flag: Option<Flag>,
}

/// Summary statistics over one batch of readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Percentage with one decimal, e.g. `"70.0%"`. Always defined, even
    /// for an empty batch.
    pub match_rate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_orders_exact_above_fuzzy_above_none() {
        assert!(Confidence::Exact > Confidence::Fuzzy);
        assert!(Confidence::Fuzzy > Confidence::None);
    }

    #[test]
    fn flag_serializes_screaming_snake() {
        let json = serde_json::to_string(&Flag::CriticalLow).unwrap();
        assert_eq!(json, "\"CRITICAL_LOW\"");
        assert!(Flag::CriticalHigh.is_critical());
        assert!(!Flag::Optimal.is_critical());
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::Exact).unwrap(), "\"exact\"");
        assert_eq!(serde_json::to_string(&Confidence::None).unwrap(), "\"none\"");
    }
}
