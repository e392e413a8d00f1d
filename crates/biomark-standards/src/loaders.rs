//! CSV loaders for the reference directory.
//!
//! A reference directory holds `catalog.csv` (canonical biomarker
//! definitions), `aliases.csv` (provider alias table) and `manifest.toml`
//! (integrity pins, see [`crate::doctor`]).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use biomark_model::{AliasEntry, BiomarkerId, CatalogEntry, LabProvider};

use crate::csv_utils::{parse_optional_f64, read_csv_rows};
use crate::store::ReferenceStore;

pub const CATALOG_FILE: &str = "catalog.csv";
pub const ALIASES_FILE: &str = "aliases.csv";
pub const MANIFEST_FILE: &str = "manifest.toml";
const REFERENCE_ENV_VAR: &str = "BIOMARK_REFERENCE_DIR";

/// Reference directory: `BIOMARK_REFERENCE_DIR` when set, otherwise the
/// workspace `reference/` directory.
pub fn default_reference_root() -> PathBuf {
    if let Ok(root) = std::env::var(REFERENCE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../reference")
}

/// Load catalog and aliases from a reference directory into a store.
pub fn load_reference_store(base_dir: &Path) -> Result<ReferenceStore> {
    let entries = load_catalog(&base_dir.join(CATALOG_FILE))?;
    let aliases = load_aliases(&base_dir.join(ALIASES_FILE), &entries)?;
    Ok(ReferenceStore::from_parts(entries, aliases))
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let rows = read_csv_rows(path)?;
    let mut entries = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let code = row.get("Code").cloned().unwrap_or_default();
        if code.is_empty() {
            continue;
        }
        let name = row.get("Name").cloned().unwrap_or_default();
        if name.is_empty() {
            bail!("catalog row {} ({code}) has no name", idx + 1);
        }
        entries.push(CatalogEntry {
            id: BiomarkerId(entries.len() as u64 + 1),
            code: code.to_uppercase(),
            name,
            category: row
                .get("Category")
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            default_unit: row.get("Default Unit").filter(|v| !v.is_empty()).cloned(),
            optimal_low: parse_optional_f64(row.get("Optimal Low"), "Optimal Low")
                .with_context(|| format!("catalog row {} ({code})", idx + 1))?,
            optimal_high: parse_optional_f64(row.get("Optimal High"), "Optimal High")
                .with_context(|| format!("catalog row {} ({code})", idx + 1))?,
            ref_low: parse_optional_f64(row.get("Ref Low"), "Ref Low")
                .with_context(|| format!("catalog row {} ({code})", idx + 1))?,
            ref_high: parse_optional_f64(row.get("Ref High"), "Ref High")
                .with_context(|| format!("catalog row {} ({code})", idx + 1))?,
        });
    }
    Ok(entries)
}

/// Load the alias table. Every row must reference a code present in the
/// catalog; broken references are reference-data defects and fail the load.
pub fn load_aliases(path: &Path, entries: &[CatalogEntry]) -> Result<Vec<AliasEntry>> {
    let rows = read_csv_rows(path)?;
    let mut aliases = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let code = row.get("Biomarker Code").cloned().unwrap_or_default();
        if code.is_empty() {
            continue;
        }
        let entry = entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(&code))
            .with_context(|| format!("alias row {} references unknown code {code:?}", idx + 1))?;
        let provider_raw = row.get("Provider").cloned().unwrap_or_default();
        let provider = LabProvider::from_str(&provider_raw)
            .with_context(|| format!("alias row {} ({code})", idx + 1))?;
        let alias_name = row.get("Alias Name").cloned().unwrap_or_default();
        if alias_name.is_empty() {
            bail!("alias row {} ({code}) has no alias name", idx + 1);
        }
        aliases.push(AliasEntry {
            biomarker_id: entry.id,
            provider,
            alias_name,
            alias_code: row.get("Alias Code").filter(|v| !v.is_empty()).cloned(),
            lab_unit: row.get("Lab Unit").filter(|v| !v.is_empty()).cloned(),
            conversion_factor: parse_optional_f64(row.get("Conversion Factor"), "Conversion Factor")
                .with_context(|| format!("alias row {} ({code})", idx + 1))?,
            lab_ref_low: parse_optional_f64(row.get("Lab Ref Low"), "Lab Ref Low")
                .with_context(|| format!("alias row {} ({code})", idx + 1))?,
            lab_ref_high: parse_optional_f64(row.get("Lab Ref High"), "Lab Ref High")
                .with_context(|| format!("alias row {} ({code})", idx + 1))?,
        });
    }
    Ok(aliases)
}
