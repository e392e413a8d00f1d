//! Human-readable tables for CLI output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use biomark_model::{Confidence, Flag, ProcessingResult};
use biomark_standards::{AliasStats, CatalogListing, CheckStatus, DoctorReport};

pub fn print_processing_summary(result: &ProcessingResult) {
    if let Some(patient) = &result.extraction.metadata.patient_name {
        println!("Patient: {patient}");
    }
    if let Some(date) = &result.extraction.metadata.collection_date {
        println!("Collected: {date}");
    }
    if let Some(date) = &result.extraction.metadata.report_date {
        println!("Reported: {date}");
    }
    println!("Text length: {} chars", result.text_length);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Reading"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Matched To"),
        header_cell("Via"),
        header_cell("Confidence"),
        header_cell("Flag"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);

    for matched in &result.matched {
        let reading = &matched.reading;
        table.add_row(vec![
            Cell::new(&reading.name),
            Cell::new(&reading.value),
            Cell::new(reading.unit.as_deref().unwrap_or("-")),
            match &matched.catalog_match {
                Some(hit) => Cell::new(&hit.name),
                None => dim_cell("-"),
            },
            match &matched.matched_via {
                Some(via) => Cell::new(via),
                None => dim_cell("-"),
            },
            confidence_cell(matched.confidence),
            flag_cell(matched.calculated_flag),
        ]);
    }
    println!("{table}");

    println!(
        "Readings: {} total, {} matched, {} unmatched ({} match rate)",
        result.stats.total, result.stats.matched, result.stats.unmatched, result.stats.match_rate
    );
    if !result.unmatched_names.is_empty() {
        println!("Unmatched:");
        for name in &result.unmatched_names {
            println!("- {name}");
        }
    }
}

pub fn print_catalog(listings: &[CatalogListing]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Unit"),
        header_cell("Optimal"),
        header_cell("Reference"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);

    for listing in listings {
        let entry = &listing.entry;
        let aliases = if listing.aliases.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(
                listing
                    .aliases
                    .iter()
                    .map(|alias| format!("{}: {}", alias.provider, alias.alias_name))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        };
        table.add_row(vec![
            Cell::new(&entry.category),
            Cell::new(&entry.code).fg(Color::Blue),
            Cell::new(&entry.name),
            Cell::new(entry.default_unit.as_deref().unwrap_or("-")),
            range_cell(entry.optimal_low, entry.optimal_high),
            range_cell(entry.ref_low, entry.ref_high),
            aliases,
        ]);
    }
    println!("{table}");
}

pub fn print_alias_stats(stats: &AliasStats) {
    println!(
        "{} aliases across {} biomarkers",
        stats.total, stats.biomarker_count
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Provider"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &stats.by_provider {
        table.add_row(vec![
            Cell::new(entry.provider),
            Cell::new(entry.count),
        ]);
    }
    println!("{table}");
}

pub fn print_doctor_report(report: &DoctorReport) {
    println!(
        "Pins: catalog {} / aliases {}",
        report.pins.0, report.pins.1
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Role"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for check in &report.checks {
        let status = match &check.status {
            CheckStatus::Ok => Cell::new("OK").fg(Color::Green),
            CheckStatus::Missing => Cell::new("MISSING")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            CheckStatus::DigestMismatch { expected, actual } => Cell::new(format!(
                "DIGEST MISMATCH (expected {expected}, got {actual})"
            ))
            .fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&check.path),
            Cell::new(&check.role),
            status,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(confidence: Confidence) -> Cell {
    match confidence {
        Confidence::Exact => Cell::new("exact").fg(Color::Green),
        Confidence::Fuzzy => Cell::new("fuzzy").fg(Color::Yellow),
        Confidence::None => dim_cell("none"),
    }
}

fn flag_cell(flag: Option<Flag>) -> Cell {
    match flag {
        Some(flag @ (Flag::CriticalLow | Flag::CriticalHigh)) => Cell::new(flag.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(flag @ (Flag::Low | Flag::High)) => Cell::new(flag.as_str()).fg(Color::Yellow),
        Some(Flag::Optimal) => Cell::new(Flag::Optimal.as_str()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn range_cell(low: Option<f64>, high: Option<f64>) -> Cell {
    match (low, high) {
        (None, None) => dim_cell("-"),
        (low, high) => Cell::new(format!("{}-{}", bound(low), bound(high))),
    }
}

fn bound(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value}"),
        None => "*".to_string(),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
