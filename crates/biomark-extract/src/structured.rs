//! Structuring extraction seam.

use biomark_model::{ExtractionPayload, LabProvider};
use tracing::debug;

use crate::error::ExtractError;
use crate::response::decode_extraction_response;

/// Turns extracted report text into a structured reading list.
///
/// The production implementation calls an AI structuring service and is
/// injected at startup. Code downstream of this trait never branches on
/// whether the service is configured; an [`UnavailableExtractor`] stands in
/// when it is not.
pub trait ReadingExtractor: Send + Sync {
    fn extract_readings(
        &self,
        text: &str,
        provider: LabProvider,
    ) -> Result<ExtractionPayload, ExtractError>;
}

/// Selected at startup when no structuring collaborator is configured.
/// Every call fails with a configuration error before any extraction work.
#[derive(Debug)]
pub struct UnavailableExtractor {
    reason: String,
}

impl UnavailableExtractor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::new("no structuring service credential configured")
    }
}

impl ReadingExtractor for UnavailableExtractor {
    fn extract_readings(
        &self,
        _text: &str,
        _provider: LabProvider,
    ) -> Result<ExtractionPayload, ExtractError> {
        Err(ExtractError::Configuration {
            message: self.reason.clone(),
        })
    }
}

/// Extractor that replays a fixed raw response through the standard decode
/// stage. Backs the `--structured` CLI path (payload produced elsewhere)
/// and pipeline tests.
#[derive(Debug)]
pub struct StaticExtractor {
    response: String,
}

impl StaticExtractor {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl ReadingExtractor for StaticExtractor {
    fn extract_readings(
        &self,
        _text: &str,
        provider: LabProvider,
    ) -> Result<ExtractionPayload, ExtractError> {
        debug!(provider = %provider, "decoding pre-structured response");
        decode_extraction_response(&self.response)
    }
}
