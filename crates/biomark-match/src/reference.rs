//! Read-only view of the reference snapshot the matcher runs against.

use biomark_model::{AliasEntry, BiomarkerId, CatalogEntry, LabProvider};

/// Read-only access to canonical biomarker definitions and provider aliases.
///
/// The matching cascade needs exactly two reads: the provider-scoped alias
/// list and the full catalog. Keeping the seam this narrow lets the cascade
/// be unit-tested against fabricated in-memory data without any store
/// dependency.
pub trait Reference {
    /// All canonical catalog entries, in snapshot order.
    fn catalog(&self) -> &[CatalogEntry];

    /// Aliases registered for the given provider, in snapshot iteration
    /// order. That order is load-bearing: the fuzzy strategy takes the
    /// first containment match it finds.
    fn provider_aliases(&self, provider: LabProvider) -> Vec<&AliasEntry>;

    fn find_entry(&self, id: BiomarkerId) -> Option<&CatalogEntry> {
        self.catalog().iter().find(|entry| entry.id == id)
    }
}

/// Plain in-memory reference set. Used directly in tests and as the
/// snapshot type handed out by the reference store.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub entries: Vec<CatalogEntry>,
    pub aliases: Vec<AliasEntry>,
}

impl ReferenceSet {
    pub fn new(entries: Vec<CatalogEntry>, aliases: Vec<AliasEntry>) -> Self {
        Self { entries, aliases }
    }
}

impl Reference for ReferenceSet {
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
