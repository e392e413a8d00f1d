pub mod catalog;
pub mod error;
pub mod matching;
pub mod processing;
pub mod provider;
pub mod reading;

pub use catalog::{AliasEntry, BiomarkerId, CatalogEntry};
pub use error::{ModelError, Result};
pub use matching::{CatalogHit, Confidence, Flag, MatchResult, MatchStats};
pub use processing::{ProcessingResult, TEXT_PREVIEW_CHARS};
pub use provider::LabProvider;
pub use reading::{ExtractionMetadata, ExtractionPayload, RawReading};
