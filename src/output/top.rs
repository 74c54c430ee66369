use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::core::TopPairResult;
use crate::output::format::{
    NumberFormat, create_styled_table, entries_json, format_number, header_cell, ordered_entries,
    right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TopTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

/// One row per shared project of the winning pair, then a total row
pub(crate) fn print_top_table(top: &TopPairResult, options: TopTableOptions) {
    let use_color = options.use_color;
    let number_format = options.number_format;

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Employee ID #1", use_color),
        header_cell("Employee ID #2", use_color),
        header_cell("Project ID", use_color),
        header_cell("Days Worked", use_color),
    ]);

    if let Some(pair) = &top.pair {
        for entry in ordered_entries(&top.entries, options.order) {
            table.add_row(vec![
                Cell::new(pair.first()),
                Cell::new(pair.second()),
                Cell::new(&entry.project),
                right_cell(&format_number(entry.days, number_format), None, false),
            ]);
        }
    }

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    table.add_row(vec![
        styled_cell("Total:", cyan, true),
        Cell::new(""),
        Cell::new(""),
        right_cell(&format_number(top.total_days, number_format), cyan, true),
    ]);

    println!("\n  Longest Working Pair\n");
    println!("{table}");
    if top.is_empty() {
        println!("\n  No overlapping assignments found.");
    }
}

pub(crate) fn output_top_json(top: &TopPairResult, order: SortOrder) -> String {
    let entries = ordered_entries(&top.entries, order);
    let output = serde_json::json!({
        "employee_1": top.pair.as_ref().map(|p| p.first()),
        "employee_2": top.pair.as_ref().map(|p| p.second()),
        "total_days": top.total_days,
        "projects": entries_json(&entries),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}
