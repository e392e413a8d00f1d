//! Text extraction seam.

use crate::error::{ExtractError, ExtractionStage};

/// Turns a raw document into text.
///
/// PDF and OCR engines live behind this seam; the pipeline only sees
/// `bytes -> text`. Failure is fatal for the whole request.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Built-in extractor for reports that already arrive as plain text.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        String::from_utf8(bytes.to_vec()).map_err(|error| ExtractError::Upstream {
            stage: ExtractionStage::Text,
            message: format!("document is not valid UTF-8 text: {error}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_utf8_text() {
        let text = PlainTextExtractor::new()
            .extract_text("Testosterone, Total 650 ng/dL".as_bytes())
            .unwrap();
        assert!(text.contains("650"));
    }

    #[test]
    fn rejects_binary_input() {
        let error = PlainTextExtractor::new()
            .extract_text(&[0xff, 0xfe, 0x00, 0x80])
            .unwrap_err();
        assert!(matches!(
            error,
            ExtractError::Upstream {
                stage: ExtractionStage::Text,
                ..
            }
        ));
    }
}
