//! In-memory reference store.
//!
//! Holds the immutable catalog plus the alias table and hands both to the
//! matching cascade through the [`Reference`] trait. The only mutation path
//! is [`ReferenceStore::add_alias`]; everything else is read-only, so a
//! store borrowed per request needs no locking.

use std::collections::BTreeMap;

use serde::Serialize;

use biomark_match::Reference;
use biomark_model::{AliasEntry, BiomarkerId, CatalogEntry, LabProvider};

use crate::error::StandardsError;

#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: Vec<CatalogEntry>,
    aliases: Vec<AliasEntry>,
}

/// One catalog entry with its registered aliases, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub aliases: Vec<AliasEntry>,
}

/// Alias table totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasStats {
    pub total: usize,
    /// Distinct biomarkers that have at least one alias.
    pub biomarker_count: usize,
    /// Per-provider counts, highest first.
    pub by_provider: Vec<ProviderAliasCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderAliasCount {
    pub provider: LabProvider,
    pub count: usize,
}

impl ReferenceStore {
    pub fn from_parts(entries: Vec<CatalogEntry>, aliases: Vec<AliasEntry>) -> Self {
        Self { entries, aliases }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    pub fn find_by_code(&self, code: &str) -> Option<&CatalogEntry> {
        let needle = code.trim();
        self.entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(needle))
    }

    /// Register a provider alias for an existing catalog entry.
    ///
    /// The referenced code must already exist; otherwise nothing is created
    /// and the caller gets [`StandardsError::UnknownBiomarker`]. A blank
    /// alias name is rejected the same way, before any lookup.
    pub fn add_alias(
        &mut self,
        code: &str,
        provider: LabProvider,
        alias_name: &str,
    ) -> Result<AliasEntry, StandardsError> {
        if alias_name.trim().is_empty() {
            return Err(StandardsError::InvalidAlias {
                message: "alias name must not be blank".to_string(),
            });
        }
        let entry = self
            .find_by_code(code)
            .ok_or_else(|| StandardsError::UnknownBiomarker {
                code: code.trim().to_string(),
            })?;
        let alias = AliasEntry {
            biomarker_id: entry.id,
            provider,
            alias_name: alias_name.to_string(),
            alias_code: None,
            lab_unit: None,
            conversion_factor: None,
            lab_ref_low: None,
            lab_ref_high: None,
        };
        self.aliases.push(alias.clone());
        Ok(alias)
    }

    /// Catalog entries with their aliases, ordered by category then name.
    pub fn catalog_listing(&self) -> Vec<CatalogListing> {
        let mut listings: Vec<CatalogListing> = self
            .entries
            .iter()
            .map(|entry| CatalogListing {
                entry: entry.clone(),
                aliases: self
                    .aliases
                    .iter()
                    .filter(|alias| alias.biomarker_id == entry.id)
                    .cloned()
                    .collect(),
            })
            .collect();
        listings.sort_by(|a, b| {
            a.entry
                .category
                .cmp(&b.entry.category)
                .then_with(|| a.entry.name.cmp(&b.entry.name))
        });
        listings
    }

    pub fn alias_stats(&self) -> AliasStats {
        let mut by_provider: BTreeMap<LabProvider, usize> = BTreeMap::new();
        let mut biomarkers: BTreeMap<BiomarkerId, usize> = BTreeMap::new();
        for alias in &self.aliases {
            *by_provider.entry(alias.provider).or_insert(0) += 1;
            *biomarkers.entry(alias.biomarker_id).or_insert(0) += 1;
        }
        let mut by_provider: Vec<ProviderAliasCount> = by_provider
            .into_iter()
            .map(|(provider, count)| ProviderAliasCount { provider, count })
            .collect();
        by_provider.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.provider.cmp(&b.provider))
        });
        AliasStats {
            total: self.aliases.len(),
            biomarker_count: biomarkers.len(),
            by_provider,
        }
    }
}

impl Reference for ReferenceStore {
    fn catalog(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn provider_aliases(&self, provider: LabProvider) -> Vec<&AliasEntry> {
        self.aliases
            .iter()
            .filter(|alias| alias.provider == provider)
            .collect()
    }
}
