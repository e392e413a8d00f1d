//! Command runners behind the CLI surface.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use biomark_core::ReportPipeline;
use biomark_extract::{
    PlainTextExtractor, ReadingExtractor, StaticExtractor, UnavailableExtractor,
};
use biomark_model::{AliasEntry, LabProvider, ProcessingResult};
use biomark_standards::{
    AliasOverlay, ReferenceStore, apply_overlay, default_reference_root, load_reference_store,
    verify_reference_dir,
};

use crate::cli::{AliasAddArgs, ProcessArgs};
use crate::summary::{print_alias_stats, print_catalog, print_doctor_report};

/// Resolve the reference directory from the CLI flag, the environment, or
/// the workspace default.
pub fn reference_root(overridden: Option<&Path>) -> PathBuf {
    match overridden {
        Some(dir) => dir.to_path_buf(),
        None => default_reference_root(),
    }
}

fn parse_provider(raw: &str) -> Result<LabProvider> {
    if raw.trim().is_empty() {
        bail!("a lab provider is required (one of QUEST, LABCORP, BOSTON_HEART, VIBRANT_AMERICA, OTHER)");
    }
    LabProvider::from_str(raw).with_context(|| format!("unsupported provider {raw:?}"))
}

/// Load the reference store: pinned CSV tables plus the local alias overlay.
fn load_store(reference_dir: &Path) -> Result<ReferenceStore> {
    let mut store = load_reference_store(reference_dir)
        .with_context(|| format!("load reference data from {}", reference_dir.display()))?;
    let overlay = AliasOverlay::in_reference_dir(reference_dir);
    let overlay_aliases = overlay.load()?;
    if !overlay_aliases.is_empty() {
        let (applied, skipped) = apply_overlay(&mut store, &overlay_aliases);
        info!(applied, "applied overlay aliases");
        for error in skipped {
            warn!(%error, "skipped stale overlay alias");
        }
    }
    Ok(store)
}

pub fn run_process(args: &ProcessArgs, reference_dir: &Path) -> Result<ProcessingResult> {
    let provider = parse_provider(&args.provider)?;
    let store = load_store(reference_dir)?;

    let document = fs::read(&args.report)
        .with_context(|| format!("read report {}", args.report.display()))?;

    let text_extractor = PlainTextExtractor::new();
    let reading_extractor: Box<dyn ReadingExtractor> = match &args.structured {
        Some(path) => {
            let response = fs::read_to_string(path)
                .with_context(|| format!("read structured payload {}", path.display()))?;
            Box::new(StaticExtractor::new(response))
        }
        None => Box::new(UnavailableExtractor::new(
            "no structuring service credential configured; pass --structured <JSON>",
        )),
    };

    let pipeline = ReportPipeline::new(&text_extractor, reading_extractor.as_ref(), &store);
    let result = pipeline.process(&document, provider)?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&result).context("serialize processing result")?;
        fs::write(path, json).with_context(|| format!("write result to {}", path.display()))?;
        info!(path = %path.display(), "wrote processing result");
    }

    Ok(result)
}

pub fn run_catalog(reference_dir: &Path) -> Result<()> {
    let store = load_store(reference_dir)?;
    print_catalog(&store.catalog_listing());
    Ok(())
}

pub fn run_alias_add(args: &AliasAddArgs, reference_dir: &Path) -> Result<AliasEntry> {
    let provider = parse_provider(&args.provider)?;
    if args.code.trim().is_empty() {
        bail!("a biomarker code is required");
    }
    let mut store = load_store(reference_dir)?;
    let created = store.add_alias(&args.code, provider, &args.alias)?;
    if args.save {
        let overlay = AliasOverlay::in_reference_dir(reference_dir);
        overlay.append(&args.code, provider, &args.alias)?;
        info!(path = %overlay.path().display(), "saved alias to overlay");
    }
    Ok(created)
}

pub fn run_alias_stats(reference_dir: &Path) -> Result<()> {
    let store = load_store(reference_dir)?;
    print_alias_stats(&store.alias_stats());
    Ok(())
}

/// Returns true when every manifest check passed.
pub fn run_doctor(reference_dir: &Path) -> Result<bool> {
    let report = verify_reference_dir(reference_dir)?;
    print_doctor_report(&report);
    Ok(report.is_healthy())
}
