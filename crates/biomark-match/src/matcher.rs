//! Three-strategy name matching cascade.

use biomark_model::{CatalogHit, Confidence, LabProvider};

use crate::reference::Reference;

/// Outcome of resolving one raw reading name against the catalog.
#[derive(Debug, Clone)]
pub struct NameMatch {
    pub catalog_match: Option<CatalogHit>,
    pub matched_via: Option<String>,
    pub confidence: Confidence,
}

impl NameMatch {
    fn none() -> Self {
        Self {
            catalog_match: None,
            matched_via: None,
            confidence: Confidence::None,
        }
    }
}

/// Normalization applied to both sides of every comparison: lowercase and
/// trim, nothing else. Punctuation is deliberately preserved — provider
/// aliases are stored verbatim, commas and all.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve a raw reading name to a canonical biomarker.
///
/// Strategies run in order and the first success wins:
/// 1. exact alias match among the provider's aliases;
/// 2. fuzzy alias match — bidirectional substring containment, first alias
///    in snapshot iteration order (no ranking by overlap or edit distance);
/// 3. direct catalog match against the canonical name, or the code with
///    underscores read as spaces.
///
/// Pure function of the inputs; no reading ever fails to produce a result.
pub fn match_reading_name<R: Reference + ?Sized>(
    name: &str,
    provider: LabProvider,
    reference: &R,
) -> NameMatch {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return NameMatch::none();
    }

    let aliases = reference.provider_aliases(provider);

    for alias in &aliases {
        if normalize_name(&alias.alias_name) == normalized {
            if let Some(entry) = reference.find_entry(alias.biomarker_id) {
                return NameMatch {
                    catalog_match: Some(entry.into()),
                    matched_via: Some(format!("alias: \"{}\"", alias.alias_name)),
                    confidence: Confidence::Exact,
                };
            }
        }
    }

    // TODO(product): first containment match wins here; specificity ranking
    // is an open question tracked in DESIGN.md.
    for alias in &aliases {
        let alias_norm = normalize_name(&alias.alias_name);
        if alias_norm.contains(&normalized) || normalized.contains(&alias_norm) {
            if let Some(entry) = reference.find_entry(alias.biomarker_id) {
                return NameMatch {
                    catalog_match: Some(entry.into()),
                    matched_via: Some(format!("fuzzy alias: \"{}\"", alias.alias_name)),
                    confidence: Confidence::Fuzzy,
                };
            }
        }
    }

    for entry in reference.catalog() {
        let canonical_name = entry.name.to_lowercase();
        let canonical_code = entry.code.replace('_', " ").to_lowercase();
        if normalized == canonical_name || normalized == canonical_code {
            return NameMatch {
                catalog_match: Some(entry.into()),
                matched_via: Some("direct name match".to_string()),
                confidence: Confidence::Exact,
            };
        }
    }

    NameMatch::none()
}
