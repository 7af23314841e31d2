use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rdfv_cli::pipeline::ValidationOutcome;
use rdfv_model::Severity;
use rdfv_report::ReportDocument;

use crate::commands::ReportRun;

/// Print a run summary to stderr.
pub fn print_summary(run: &ReportRun) {
    if let Some(path) = &run.output {
        eprintln!("Report ({}): {}", run.format, path.display());
    }
    match &run.outcome {
        ValidationOutcome::Report(document) => print_report_summary(document),
        ValidationOutcome::Failure(failure) => {
            eprintln!("Extraction failed:");
            for cause in &failure.error_chain {
                eprintln!("- {cause}");
            }
        }
    }
}

fn print_report_summary(document: &ReportDocument) {
    if !document.source().is_empty() {
        eprintln!("Source: {}", document.source());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Count"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in document.groups() {
        for (kind, count) in group.kind_counts() {
            table.add_row(vec![
                severity_cell(group.severity),
                Cell::new(kind),
                count_cell(count, severity_color(group.severity)),
            ]);
        }
    }
    let summary = document.summary();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} errors, {} warnings, {} info",
            summary.error_count, summary.warning_count, summary.info_count
        )),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    match document.serialized_data() {
        Some(data) if data.lossy => eprintln!(
            "Data: {} ({} bytes, decoded from {})",
            data.format,
            data.text.len(),
            data.encoding
        ),
        Some(data) => eprintln!("Data: {} ({} bytes)", data.format, data.text.len()),
        None => {
            if let Some(error) = document.data_error() {
                eprintln!("Data unavailable: {error}");
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Blue),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
