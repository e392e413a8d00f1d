use biomark_match::{ReferenceSet, aggregate_readings};
use biomark_model::{AliasEntry, BiomarkerId, CatalogEntry, Confidence, Flag, LabProvider, RawReading};

fn testosterone_reference() -> ReferenceSet {
    ReferenceSet::new(
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
            lab_ref_low: None,
            lab_ref_high: None,
        }],
    )
}

fn reading(name: &str, value: &str) -> RawReading {
    RawReading {
        name: name.to_string(),
        value: value.to_string(),
        unit: None,
        ref_range: None,
        flag: None,
    }
}

#[test]
fn exact_match_with_optimal_value() {
    let reference = testosterone_reference();
    let readings = vec![reading("Testosterone, Total", "650")];
    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);

    let result = &aggregate.results[0];
    assert_eq!(result.confidence, Confidence::Exact);
    assert_eq!(result.numeric_value, Some(650.0));
    assert_eq!(result.calculated_flag, Some(Flag::Optimal));
    assert_eq!(aggregate.stats.match_rate, "100.0%");
}

#[test]
fn fuzzy_match_with_critically_low_value() {
    let reference = testosterone_reference();
    // 211 < 600 * 0.8 = 480
    let readings = vec![reading("TESTOSTERONE, TOTAL, MS", "211")];
    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);

    let result = &aggregate.results[0];
    assert_eq!(result.confidence, Confidence::Fuzzy);
    assert_eq!(result.numeric_value, Some(211.0));
    assert_eq!(result.calculated_flag, Some(Flag::CriticalLow));
}

#[test]
fn provider_supplied_flag_is_ignored_for_classification() {
    let reference = testosterone_reference();
    let mut raw = reading("Testosterone, Total", "650");
    raw.flag = Some("LOW".to_string());
    let aggregate = aggregate_readings(&[raw], LabProvider::Quest, &reference);
    assert_eq!(aggregate.results[0].calculated_flag, Some(Flag::Optimal));
}

#[test]
fn non_numeric_value_matches_without_flag() {
    let reference = testosterone_reference();
    let readings = vec![reading("Testosterone, Total", "Not Detected")];
    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);

    let result = &aggregate.results[0];
    assert_eq!(result.confidence, Confidence::Exact);
    assert_eq!(result.numeric_value, None);
    assert_eq!(result.calculated_flag, None);
}

#[test]
fn unmatched_reading_still_parses_value() {
    let reference = testosterone_reference();
    let readings = vec![reading("Reverse T3", "18.5")];
    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);

    let result = &aggregate.results[0];
    assert_eq!(result.confidence, Confidence::None);
    assert_eq!(result.numeric_value, Some(18.5));
    assert_eq!(result.calculated_flag, None);
    assert_eq!(aggregate.unmatched_names, vec!["Reverse T3".to_string()]);
}

#[test]
fn batch_stats_count_matched_and_unmatched() {
    let reference = testosterone_reference();
    let mut readings = Vec::new();
    for i in 0..7 {
        readings.push(reading("Testosterone, Total", &format!("{}", 600 + i)));
    }
    readings.push(reading("Ferritin", "120"));
    readings.push(reading("Homocysteine", "9"));
    readings.push(reading("ApoB", "80"));

    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);
    assert_eq!(aggregate.stats.total, 10);
    assert_eq!(aggregate.stats.matched, 7);
    assert_eq!(aggregate.stats.unmatched, 3);
    assert_eq!(aggregate.stats.match_rate, "70.0%");
    assert_eq!(aggregate.unmatched_names.len(), 3);
}

#[test]
fn results_preserve_input_order() {
    let reference = testosterone_reference();
    let readings = vec![
        reading("Ferritin", "120"),
        reading("Testosterone, Total", "650"),
        reading("ApoB", "80"),
    ];
    let aggregate = aggregate_readings(&readings, LabProvider::Quest, &reference);
    let names: Vec<&str> = aggregate
        .results
        .iter()
        .map(|r| r.reading.name.as_str())
        .collect();
    assert_eq!(names, ["Ferritin", "Testosterone, Total", "ApoB"]);
    assert_eq!(aggregate.unmatched_names, ["Ferritin", "ApoB"]);
}

#[test]
fn empty_batch_reports_defined_rate() {
    let reference = testosterone_reference();
    let aggregate = aggregate_readings(&[], LabProvider::Quest, &reference);
    assert_eq!(aggregate.stats.total, 0);
    assert_eq!(aggregate.stats.matched, 0);
    assert_eq!(aggregate.stats.unmatched, 0);
    assert_eq!(aggregate.stats.match_rate, "0.0%");
    assert!(aggregate.results.is_empty());
    assert!(aggregate.unmatched_names.is_empty());
}
