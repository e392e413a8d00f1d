#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// `manifest.toml` at the root of a reference directory: pins the catalog
/// and alias tables by content digest so a drifting reference set is caught
/// at load time instead of producing silently different matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

/// Version labels of the pinned reference tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pins {
    pub catalog: String,
    pub aliases: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub role: String,
}
