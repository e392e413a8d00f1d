use biomark_core::{PipelineError, ReportPipeline};
use biomark_extract::{ExtractError, PlainTextExtractor, StaticExtractor, UnavailableExtractor};
use biomark_model::{AliasEntry, BiomarkerId, CatalogEntry, Confidence, Flag, LabProvider};
use biomark_standards::ReferenceStore;

const REPORT_TEXT: &str = "QUEST DIAGNOSTICS\nTestosterone, Total 650 ng/dL (264-916)\n";

fn testosterone_store() -> ReferenceStore {
    ReferenceStore::from_parts(
        vec![CatalogEntry {
            id: BiomarkerId(1),
            code: "TOTAL_TESTOSTERONE".to_string(),
            name: "Total Testosterone".to_string(),
            category: "Hormones".to_string(),
            default_unit: Some("ng/dL".to_string()),
            optimal_low: Some(600.0),
            optimal_high: Some(900.0),
            ref_low: Some(264.0),
            ref_high: Some(916.0),
        }],
        vec![AliasEntry {
            biomarker_id: BiomarkerId(1),
            provider: LabProvider::Quest,
            alias_name: "Testosterone, Total".to_string(),
            alias_code: None,
            lab_unit: Some("ng/dL".to_string()),
            conversion_factor: None,
            lab_ref_low: Some(264.0),
            lab_ref_high: Some(916.0),
        }],
    )
}

#[test]
fn processes_report_with_exact_match() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = StaticExtractor::new(
        r#"```json
{
  "collectionDate": "2024-03-05",
  "patientName": "A. Sample",
  "biomarkers": [
    {"name": "Testosterone, Total", "value": "650", "unit": "ng/dL", "refRange": "264-916"}
  ]
}
```"#,
    );
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let result = pipeline
        .process(REPORT_TEXT.as_bytes(), LabProvider::Quest)
        .expect("pipeline succeeds");

    assert!(result.success);
    assert_eq!(result.text_length, REPORT_TEXT.chars().count());
    assert_eq!(result.pdf_text_preview, REPORT_TEXT);
    assert_eq!(
        result.extraction.metadata.collection_date.as_deref(),
        Some("2024-03-05")
    );

    assert_eq!(result.matched.len(), 1);
    let matched = &result.matched[0];
    assert_eq!(matched.confidence, Confidence::Exact);
    assert_eq!(matched.numeric_value, Some(650.0));
    assert_eq!(matched.calculated_flag, Some(Flag::Optimal));
    assert_eq!(
        matched.matched_via.as_deref(),
        Some("alias: \"Testosterone, Total\"")
    );
    assert_eq!(result.stats.match_rate, "100.0%");
}

#[test]
fn processes_report_with_fuzzy_critical_low() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = StaticExtractor::new(
        r#"{"biomarkers": [{"name": "TESTOSTERONE, TOTAL, MS", "value": "211"}]}"#,
    );
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let result = pipeline
        .process(REPORT_TEXT.as_bytes(), LabProvider::Quest)
        .expect("pipeline succeeds");

    let matched = &result.matched[0];
    assert_eq!(matched.confidence, Confidence::Fuzzy);
    assert_eq!(matched.numeric_value, Some(211.0));
    // 211 < 600 * 0.8
    assert_eq!(matched.calculated_flag, Some(Flag::CriticalLow));
}

#[test]
fn stats_cover_matched_and_unmatched_readings() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = StaticExtractor::new(
        r#"{"biomarkers": [
            {"name": "Testosterone, Total", "value": "650"},
            {"name": "Reverse T3", "value": "18.5"}
        ]}"#,
    );
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let result = pipeline
        .process(REPORT_TEXT.as_bytes(), LabProvider::Quest)
        .expect("pipeline succeeds");

    assert_eq!(result.unmatched_names, vec!["Reverse T3".to_string()]);
    insta::assert_json_snapshot!(result.stats, @r#"
    {
      "total": 2,
      "matched": 1,
      "unmatched": 1,
      "matchRate": "50.0%"
    }
    "#);
}

#[test]
fn empty_document_is_rejected_before_extraction() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    // Would fail with a configuration error if it were ever called.
    let structured = UnavailableExtractor::missing_credential();
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let error = pipeline.process(&[], LabProvider::Quest).unwrap_err();
    assert!(matches!(error, PipelineError::Validation { .. }));
}

#[test]
fn unconfigured_collaborator_fails_the_request() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = UnavailableExtractor::missing_credential();
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let error = pipeline
        .process(REPORT_TEXT.as_bytes(), LabProvider::Quest)
        .unwrap_err();
    assert!(matches!(
        error,
        PipelineError::Extract(ExtractError::Configuration { .. })
    ));
}

#[test]
fn malformed_response_aborts_without_partial_result() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = StaticExtractor::new("Sorry, I could not parse this report.");
    let pipeline = ReportPipeline::new(&text, &structured, &store);
    let error = pipeline
        .process(REPORT_TEXT.as_bytes(), LabProvider::Quest)
        .unwrap_err();
    assert!(matches!(
        error,
        PipelineError::Extract(ExtractError::MalformedResponse { .. })
    ));
}

#[test]
fn long_text_is_previewed_with_ellipsis() {
    let store = testosterone_store();
    let text = PlainTextExtractor::new();
    let structured = StaticExtractor::new(r#"{"biomarkers": []}"#);
    let pipeline = ReportPipeline::new(&text, &structured, &store);

    let long_report = "line of report text\n".repeat(200);
    let result = pipeline
        .process(long_report.as_bytes(), LabProvider::Quest)
        .expect("pipeline succeeds");

    assert_eq!(result.text_length, long_report.chars().count());
    assert!(result.pdf_text_preview.ends_with("..."));
    assert_eq!(result.pdf_text_preview.chars().count(), 2003);
    assert_eq!(result.stats.total, 0);
    assert_eq!(result.stats.match_rate, "0.0%");
}
