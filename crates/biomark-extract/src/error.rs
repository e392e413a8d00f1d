#![deny(unsafe_code)]

use std::fmt;

/// Which external call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    Text,
    Structuring,
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ExtractionStage::Text => "text",
            ExtractionStage::Structuring => "structuring",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The structuring collaborator is not configured (e.g. missing
    /// credential). Surfaced before any extraction attempt.
    #[error("structuring extraction unavailable: {message}")]
    Configuration { message: String },

    /// An external extraction call failed. Fatal for the whole request.
    #[error("{stage} extraction failed: {message}")]
    Upstream {
        stage: ExtractionStage,
        message: String,
    },

    /// The structuring collaborator returned something that is not the
    /// expected payload. Carries a truncated excerpt for diagnosis.
    #[error("malformed structuring response: {message}; excerpt: {excerpt}")]
    MalformedResponse { message: String, excerpt: String },
}

/// Characters of offending text carried in a malformed-response error.
pub const EXCERPT_CHARS: usize = 200;

/// Truncate diagnostic text so errors stay log-friendly.
pub fn excerpt_of(text: &str) -> String {
    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    if text.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
