//! JSON overlay for aliases registered at runtime.
//!
//! The pinned CSV tables never change outside a reference-data release;
//! administrative alias additions land in `aliases.local.json` next to them
//! and are replayed on top of the CSVs at load time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use biomark_model::LabProvider;

use crate::error::StandardsError;
use crate::store::ReferenceStore;

pub const OVERLAY_FILE: &str = "aliases.local.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayAlias {
    pub code: String,
    pub provider: LabProvider,
    pub alias_name: String,
    /// ISO 8601 timestamp of registration.
    pub added_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct OverlayFile {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    aliases: Vec<OverlayAlias>,
}

fn default_version() -> String {
    "1".to_string()
}

/// File-backed overlay store.
#[derive(Debug, Clone)]
pub struct AliasOverlay {
    path: PathBuf,
}

impl AliasOverlay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_reference_dir(base_dir: &Path) -> Self {
        Self::new(base_dir.join(OVERLAY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all overlay aliases. A missing file is an empty overlay.
    pub fn load(&self) -> Result<Vec<OverlayAlias>, StandardsError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|source| StandardsError::io(&self.path, source))?;
        let file: OverlayFile =
            serde_json::from_str(&contents).map_err(|error| StandardsError::Overlay {
                path: self.path.clone(),
                message: error.to_string(),
            })?;
        Ok(file.aliases)
    }

    /// Append one alias and rewrite the overlay file.
    pub fn append(&self, code: &str, provider: LabProvider, alias_name: &str) -> Result<(), StandardsError> {
        let mut aliases = self.load()?;
        aliases.push(OverlayAlias {
            code: code.to_string(),
            provider,
            alias_name: alias_name.to_string(),
            added_at: Some(chrono::Utc::now().to_rfc3339()),
        });
        let file = OverlayFile {
            version: default_version(),
            aliases,
        };
        let json = serde_json::to_string_pretty(&file).map_err(|error| StandardsError::Overlay {
            path: self.path.clone(),
            message: error.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|source| StandardsError::io(&self.path, source))
    }
}

/// Replay overlay aliases onto a loaded store.
///
/// Aliases whose code no longer exists are skipped and reported; a stale
/// overlay must not poison an otherwise valid reference load.
pub fn apply_overlay(
    store: &mut ReferenceStore,
    aliases: &[OverlayAlias],
) -> (usize, Vec<StandardsError>) {
    let mut applied = 0;
    let mut skipped = Vec::new();
    for alias in aliases {
        match store.add_alias(&alias.code, alias.provider, &alias.alias_name) {
            Ok(_) => applied += 1,
            Err(error) => skipped.push(error),
        }
    }
    (applied, skipped)
}
