use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::core::{CollaborationMap, PairCollaboration};
use crate::output::format::{
    NumberFormat, create_styled_table, entries_json, format_number, header_cell, ordered_entries,
    right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct PairsTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) breakdown: bool,
    pub(crate) limit: Option<usize>,
    pub(crate) number_format: NumberFormat,
}

/// Ranked pairs, cut to `limit`
pub(super) fn ranked_pairs(map: &CollaborationMap, limit: Option<usize>) -> Vec<&PairCollaboration> {
    let mut ranked = map.ranked();
    if let Some(n) = limit {
        ranked.truncate(n);
    }
    ranked
}

pub(crate) fn print_pairs_table(map: &CollaborationMap, options: PairsTableOptions) {
    let use_color = options.use_color;
    let number_format = options.number_format;
    let show_projects = !options.compact && !options.breakdown;

    let mut table = create_styled_table();
    let mut header = vec![
        header_cell("Employee ID #1", use_color),
        header_cell("Employee ID #2", use_color),
    ];
    if options.breakdown {
        header.push(header_cell("Project ID", use_color));
    }
    if show_projects {
        header.push(header_cell("Projects", use_color));
    }
    header.push(header_cell("Days Worked", use_color));
    table.set_header(header);

    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let ranked = ranked_pairs(map, options.limit);

    for collab in &ranked {
        let total = format_number(collab.total_days(), number_format);
        if options.breakdown {
            for entry in ordered_entries(&collab.entries, options.order) {
                table.add_row(vec![
                    Cell::new(collab.pair.first()),
                    Cell::new(collab.pair.second()),
                    Cell::new(&entry.project),
                    right_cell(&format_number(entry.days, number_format), None, false),
                ]);
            }
            table.add_row(vec![
                styled_cell(collab.pair.first(), cyan, true),
                styled_cell(collab.pair.second(), cyan, true),
                styled_cell("Total:", cyan, true),
                right_cell(&total, cyan, true),
            ]);
        } else {
            let mut row = vec![
                Cell::new(collab.pair.first()),
                Cell::new(collab.pair.second()),
            ];
            if show_projects {
                row.push(right_cell(
                    &format_number(collab.entries.len() as i64, number_format),
                    None,
                    false,
                ));
            }
            row.push(right_cell(&total, None, false));
            table.add_row(row);
        }
    }

    println!("\n  Collaborating Pairs\n");
    println!("{table}");
    println!(
        "\n  {} of {} pairs shown",
        format_number(ranked.len() as i64, number_format),
        format_number(map.len() as i64, number_format)
    );
}

pub(crate) fn output_pairs_json(map: &CollaborationMap, order: SortOrder, limit: Option<usize>) -> String {
    let output: Vec<serde_json::Value> = ranked_pairs(map, limit)
        .into_iter()
        .map(|collab| {
            let entries = ordered_entries(&collab.entries, order);
            serde_json::json!({
                "employee_1": collab.pair.first(),
                "employee_2": collab.pair.second(),
                "total_days": collab.total_days(),
                "projects": entries_json(&entries),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}
