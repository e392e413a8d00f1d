use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Known lab providers whose reports the system ingests.
///
/// Aliases are scoped to a provider: the same printed name can resolve to
/// different biomarkers depending on which lab produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabProvider {
    Quest,
    Labcorp,
    BostonHeart,
    VibrantAmerica,
    /// Reports from labs outside the known set. Aliases may still be
    /// registered against it, but coverage is expected to be thin.
    Other,
}

impl LabProvider {
    /// All known providers, in display order.
    pub const ALL: [LabProvider; 5] = [
        LabProvider::Quest,
        LabProvider::Labcorp,
        LabProvider::BostonHeart,
        LabProvider::VibrantAmerica,
        LabProvider::Other,
    ];

    /// Returns the canonical wire form (SCREAMING_SNAKE).
    pub fn as_str(&self) -> &'static str {
        match self {
            LabProvider::Quest => "QUEST",
            LabProvider::Labcorp => "LABCORP",
            LabProvider::BostonHeart => "BOSTON_HEART",
            LabProvider::VibrantAmerica => "VIBRANT_AMERICA",
            LabProvider::Other => "OTHER",
        }
    }
}

impl fmt::Display for LabProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabProvider {
    type Err = ModelError;

    /// Parse a provider name as printed in configuration or CLI input.
    /// Case-insensitive; spaces and hyphens are treated as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "QUEST" => Ok(LabProvider::Quest),
            "LABCORP" => Ok(LabProvider::Labcorp),
            "BOSTON_HEART" => Ok(LabProvider::BostonHeart),
            "VIBRANT_AMERICA" => Ok(LabProvider::VibrantAmerica),
            "OTHER" => Ok(LabProvider::Other),
            _ => Err(ModelError::UnknownProvider(s.to_string())),
        }
    }
}
