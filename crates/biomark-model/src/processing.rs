use serde::{Deserialize, Serialize};

use crate::{ExtractionPayload, MatchResult, MatchStats};

/// Maximum number of characters of extracted text carried in the preview.
pub const TEXT_PREVIEW_CHARS: usize = 2000;

/// Final output of the report processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    /// First [`TEXT_PREVIEW_CHARS`] characters of the extracted text, with
    /// `"..."` appended when the text was truncated.
    pub pdf_text_preview: String,
    /// Length of the full extracted text in characters.
    pub text_length: usize,
    pub extraction: ExtractionPayload,
    pub matched: Vec<MatchResult>,
    pub stats: MatchStats,
    pub unmatched_names: Vec<String>,
}

impl ProcessingResult {
    /// Build the preview string for a full text.
    pub fn preview_of(text: &str) -> String {
        let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        if text.chars().count() > TEXT_PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        let text = "x".repeat(TEXT_PREVIEW_CHARS + 10);
        let preview = ProcessingResult::preview_of(&text);
        assert_eq!(preview.chars().count(), TEXT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_keeps_short_text_verbatim() {
        assert_eq!(ProcessingResult::preview_of("short"), "short");
    }
}
