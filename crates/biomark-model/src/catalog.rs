use serde::{Deserialize, Serialize};
use std::fmt;

use crate::LabProvider;

/// Identifier assigned to a catalog entry when the reference snapshot is
/// built. Stable within a snapshot, not across reloads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BiomarkerId(pub u64);

impl fmt::Display for BiomarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical definition of a biomarker.
///
/// The optimal range is the narrower, clinically-preferred band; the
/// reference range is the wider laboratory band. Either may be absent for
/// qualitative analytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: BiomarkerId,
    /// Unique canonical id, e.g. `TOTAL_TESTOSTERONE`.
    pub code: String,
    pub name: String,
    pub category: String,
    pub default_unit: Option<String>,
    pub optimal_low: Option<f64>,
    pub optimal_high: Option<f64>,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
}

/// Provider-specific textual variant of a biomarker name, verbatim as
/// printed on that provider's report. Many aliases per biomarker; the
/// matching logic enforces no uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasEntry {
    pub biomarker_id: BiomarkerId,
    pub provider: LabProvider,
    pub alias_name: String,
    pub alias_code: Option<String>,
    pub lab_unit: Option<String>,
    pub conversion_factor: Option<f64>,
    pub lab_ref_low: Option<f64>,
    pub lab_ref_high: Option<f64>,
}
