//! Reference directory verification.

use std::fs;
use std::path::Path;

use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::loaders::MANIFEST_FILE;
use crate::manifest::Manifest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Missing,
    DigestMismatch { expected: String, actual: String },
}

#[derive(Debug, Clone)]
pub struct DoctorCheck {
    pub path: String,
    pub role: String,
    pub status: CheckStatus,
}

#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub pins: (String, String),
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.checks.iter().all(|check| check.status == CheckStatus::Ok)
    }
}

/// Read the manifest and check every pinned file for presence and digest.
pub fn verify_reference_dir(base_dir: &Path) -> Result<DoctorReport, StandardsError> {
    let manifest_path = base_dir.join(MANIFEST_FILE);
    let contents = fs::read_to_string(&manifest_path)
        .map_err(|source| StandardsError::io(&manifest_path, source))?;
    let manifest: Manifest =
        toml::from_str(&contents).map_err(|source| StandardsError::Toml {
            path: manifest_path.clone(),
            source,
        })?;

    let mut checks = Vec::with_capacity(manifest.files.len());
    for file in &manifest.files {
        let path = base_dir.join(&file.path);
        let status = match fs::read(&path) {
            Err(_) => CheckStatus::Missing,
            Ok(bytes) => {
                let actual = sha256_hex(&bytes);
                if actual == file.sha256 {
                    CheckStatus::Ok
                } else {
                    CheckStatus::DigestMismatch {
                        expected: file.sha256.clone(),
                        actual,
                    }
                }
            }
        };
        checks.push(DoctorCheck {
            path: file.path.clone(),
            role: file.role.clone(),
            status,
        });
    }

    Ok(DoctorReport {
        pins: (manifest.pins.catalog, manifest.pins.aliases),
        checks,
    })
}
