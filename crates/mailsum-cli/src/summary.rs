//! Summary tables for the terminal, rendered with comfy-table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mailsum_cli::runner::{RunResult, needs_diagnostics};
use mailsum_model::{Outcome, RunStats};

pub fn print_summary(result: &RunResult) {
    println!(
        "Run completed: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("Inputs: {}", result.inputs.len());
    if let Some(path) = &result.export_path {
        println!("Export: {}", path.display());
    }

    print_overview(&result.stats);
    print_outcomes(&result.stats);
    print_couriers(&result.stats);
    if needs_diagnostics(&result.stats) {
        print_diagnostics(&result.stats);
    }
}

fn print_overview(stats: &RunStats) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total rows"),
        header_cell("Cainiao"),
        header_cell("Excluded"),
        header_cell("Final"),
    ]);
    apply_overview_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.total_rows),
        Cell::new(stats.cainiao_rows),
        count_cell(stats.excluded_rows, Color::Yellow),
        Cell::new(stats.final_count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_outcomes(stats: &RunStats) {
    if stats.outcomes.total() == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        (Outcome::Address, stats.outcomes.address),
        (Outcome::Station, stats.outcomes.station),
        (Outcome::Redelivery, stats.outcomes.redelivery),
        (Outcome::Returned, stats.outcomes.returned),
        (Outcome::Exception, stats.outcomes.exception),
    ];
    for (outcome, count) in rows {
        table.add_row(vec![Cell::new(outcome.label()), Cell::new(count)]);
    }
    println!();
    println!("Delivery outcomes:");
    println!("{table}");
}

fn print_couriers(stats: &RunStats) {
    if stats.courier_stats.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Courier"),
        header_cell("Count"),
        header_cell("Tracking numbers"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &stats.courier_stats {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(summary.count).add_attribute(Attribute::Bold),
            Cell::new(summary.tracking_numbers.join(" ")),
        ]);
    }
    println!();
    println!("Couriers:");
    println!("{table}");
}

fn print_diagnostics(stats: &RunStats) {
    println!();
    if !stats.missing_required_fields.is_empty() {
        println!(
            "Missing required columns: {}",
            stats.missing_required_fields.join("、")
        );
    }
    if stats.final_count == 0 {
        println!("No rows matched the Cainiao pattern.");
        if stats.detected_headers.is_empty() {
            println!("No headers were detected in the first file.");
        } else {
            println!(
                "Detected headers (first file): {}",
                stats.detected_headers.join("、")
            );
        }
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_overview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
