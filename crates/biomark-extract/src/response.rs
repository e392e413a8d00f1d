//! Decoding of structuring-extraction responses.
//!
//! Collaborators frequently wrap their JSON payload in a fenced code block
//! (sometimes tagged `json`). Decoding is a dedicated stage with an explicit
//! schema check so a malformed response produces a typed error instead of a
//! downstream crash.

use biomark_model::ExtractionPayload;

use crate::error::{ExtractError, excerpt_of};

/// Decode a raw structuring response into an [`ExtractionPayload`].
///
/// Steps, each failing with [`ExtractError::MalformedResponse`]:
/// 1. if the response contains a fenced code block, use its inner content,
///    otherwise the full text;
/// 2. parse as JSON;
/// 3. require `biomarkers` to be present and an array;
/// 4. deserialize into the typed payload.
pub fn decode_extraction_response(raw: &str) -> Result<ExtractionPayload, ExtractError> {
    let body = fenced_block_content(raw).unwrap_or(raw);

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|error| malformed(format!("response is not valid JSON: {error}"), body))?;

    match value.get("biomarkers") {
        None => return Err(malformed("response has no `biomarkers` field", body)),
        Some(biomarkers) if !biomarkers.is_array() => {
            return Err(malformed("`biomarkers` is not an array", body));
        }
        Some(_) => {}
    }

    serde_json::from_value(value)
        .map_err(|error| malformed(format!("payload shape mismatch: {error}"), body))
}

fn malformed(message: impl Into<String>, body: &str) -> ExtractError {
    ExtractError::MalformedResponse {
        message: message.into(),
        excerpt: excerpt_of(body),
    }
}

/// Inner content of the first fenced code block, if the response has one.
/// The opening fence may carry a language tag; the tag line is dropped.
fn fenced_block_content(raw: &str) -> Option<&str> {
    let start = raw.find("```")?;
    let after_fence = &raw[start + 3..];
    let tag_end = after_fence.find('\n')?;
    let body = &after_fence[tag_end + 1..];
    let end = body.find("```")?;
    Some(&body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
  "collectionDate": "2024-03-05",
  "patientName": "A. Sample",
  "biomarkers": [
    {"name": "Testosterone, Total", "value": "650", "unit": "ng/dL"}
  ]
}"#;

    #[test]
    fn decodes_bare_json() {
        let payload = decode_extraction_response(PAYLOAD).unwrap();
        assert_eq!(payload.biomarkers.len(), 1);
        assert_eq!(payload.metadata.collection_date.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn decodes_json_tagged_fence() {
        let wrapped = format!("Here is the extraction:\n```json\n{PAYLOAD}\n```\nDone.");
        let payload = decode_extraction_response(&wrapped).unwrap();
        assert_eq!(payload.biomarkers[0].name, "Testosterone, Total");
    }

    #[test]
    fn decodes_untagged_fence() {
        let wrapped = format!("```\n{PAYLOAD}\n```");
        let payload = decode_extraction_response(&wrapped).unwrap();
        assert_eq!(payload.biomarkers.len(), 1);
    }

    #[test]
    fn rejects_non_json() {
        let error = decode_extraction_response("I could not read the report.").unwrap_err();
        match error {
            ExtractError::MalformedResponse { excerpt, .. } => {
                assert!(excerpt.contains("could not read"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_biomarkers() {
        let error = decode_extraction_response(r#"{"patientName": "A. Sample"}"#).unwrap_err();
        match error {
            ExtractError::MalformedResponse { message, .. } => {
                assert!(message.contains("biomarkers"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_array_biomarkers() {
        let error = decode_extraction_response(r#"{"biomarkers": "none"}"#).unwrap_err();
        match error {
            ExtractError::MalformedResponse { message, .. } => {
                assert!(message.contains("not an array"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn unclosed_fence_falls_back_to_full_text() {
        // No closing fence: the whole response is parsed, which fails, and
        // the excerpt points at the full response text.
        let error = decode_extraction_response("```json\n{\"biomarkers\": []}").unwrap_err();
        assert!(matches!(error, ExtractError::MalformedResponse { .. }));
    }

    #[test]
    fn long_offending_text_is_truncated() {
        let garbage = "x".repeat(1000);
        let error = decode_extraction_response(&garbage).unwrap_err();
        match error {
            ExtractError::MalformedResponse { excerpt, .. } => {
                assert!(excerpt.chars().count() < 250);
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
