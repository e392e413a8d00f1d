//! Report processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Validate**: reject an empty document before any work
//! 2. **Text**: extract text from the raw document (external)
//! 3. **Structure**: turn text into a reading list (external + decode)
//! 4. **Match**: match, normalize and classify every reading
//! 5. **Assemble**: build the final [`ProcessingResult`]
//!
//! A failure in either external stage aborts the whole request; no partial
//! aggregate is ever returned. Per-reading ambiguity is data: an unmatched
//! reading produces a result with `confidence == none`, never an error.

use tracing::{info, info_span};

use biomark_extract::{ExtractError, ReadingExtractor, TextExtractor};
use biomark_match::{Reference, aggregate_readings};
use biomark_model::{LabProvider, ProcessingResult};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Missing or unusable request inputs; rejected before any processing.
    #[error("invalid request: {message}")]
    Validation { message: String },

    /// One of the extraction collaborators failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// The report processing pipeline with its injected collaborators.
///
/// The stages themselves are pure and synchronous over an immutable
/// reference snapshot; independent requests can run concurrently without
/// locking. The collaborator calls may block for seconds — their deadlines
/// belong to the implementations behind the seams.
pub struct ReportPipeline<'a, R: Reference + ?Sized> {
    text_extractor: &'a dyn TextExtractor,
    reading_extractor: &'a dyn ReadingExtractor,
    reference: &'a R,
}

impl<'a, R: Reference + ?Sized> ReportPipeline<'a, R> {
    pub fn new(
        text_extractor: &'a dyn TextExtractor,
        reading_extractor: &'a dyn ReadingExtractor,
        reference: &'a R,
    ) -> Self {
        Self {
            text_extractor,
            reading_extractor,
            reference,
        }
    }

    /// Process one report document end to end.
    pub fn process(
        &self,
        document: &[u8],
        provider: LabProvider,
    ) -> Result<ProcessingResult, PipelineError> {
        if document.is_empty() {
            return Err(PipelineError::Validation {
                message: "document payload is empty".to_string(),
            });
        }

        let span = info_span!("process_report", provider = %provider);
        let _guard = span.enter();

        let text = info_span!("extract_text")
            .in_scope(|| self.text_extractor.extract_text(document))?;
        let text_length = text.chars().count();
        info!(text_length, "extracted report text");

        let extraction = info_span!("extract_readings")
            .in_scope(|| self.reading_extractor.extract_readings(&text, provider))?;
        info!(readings = extraction.biomarkers.len(), "structured report");

        let aggregate = info_span!("match_readings")
            .in_scope(|| aggregate_readings(&extraction.biomarkers, provider, self.reference));
        info!(
            total = aggregate.stats.total,
            matched = aggregate.stats.matched,
            match_rate = %aggregate.stats.match_rate,
            "matched readings"
        );

        Ok(ProcessingResult {
            success: true,
            pdf_text_preview: ProcessingResult::preview_of(&text),
            text_length,
            extraction,
            matched: aggregate.results,
            stats: aggregate.stats,
            unmatched_names: aggregate.unmatched_names,
        })
    }
}
