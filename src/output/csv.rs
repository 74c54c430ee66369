use crate::cli::SortOrder;
use crate::core::{CollaborationMap, TopPairResult};
use crate::error::AppError;
use crate::output::format::ordered_entries;
use crate::output::pairs::ranked_pairs;

const HEADER: [&str; 4] = ["employee_1", "employee_2", "project", "days"];

fn finish(writer: ::csv::Writer<Vec<u8>>) -> Result<String, AppError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// One row per project of the winning pair, then a total row with empty project
pub(crate) fn output_top_csv(top: &TopPairResult, order: SortOrder) -> Result<String, AppError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    let (first, second) = top
        .pair
        .as_ref()
        .map_or(("", ""), |p| (p.first(), p.second()));

    let mut rows: Vec<[String; 4]> = ordered_entries(&top.entries, order)
        .into_iter()
        .map(|e| {
            [
                first.to_string(),
                second.to_string(),
                e.project.clone(),
                e.days.to_string(),
            ]
        })
        .collect();
    rows.push([
        first.to_string(),
        second.to_string(),
        String::new(),
        top.total_days.to_string(),
    ]);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    finish(writer)
}

/// One row per pair and project, ranked by pair total
pub(crate) fn output_pairs_csv(
    map: &CollaborationMap,
    order: SortOrder,
    limit: Option<usize>,
) -> Result<String, AppError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for collab in ranked_pairs(map, limit) {
        for entry in ordered_entries(&collab.entries, order) {
            writer.write_record([
                collab.pair.first(),
                collab.pair.second(),
                entry.project.as_str(),
                entry.days.to_string().as_str(),
            ])?;
        }
    }
    finish(writer)
}
