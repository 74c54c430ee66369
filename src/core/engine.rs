use chrono::NaiveDate;
use tracing::debug;

use crate::core::aggregator::{aggregate, select_top};
use crate::core::grouper::group_by_project;
use crate::core::types::{Assignment, Collaboration, Record, RunStats};
use crate::error::EngineError;
use crate::utils::DateParser;

/// Run the whole pipeline on `records`, treating ongoing assignments as
/// ending on `today`.
///
/// Every record is resolved before any aggregation starts, so a malformed
/// date anywhere fails the run and no partial map is ever returned.
pub(crate) fn compute(
    records: &[Record],
    parser: &DateParser,
    today: NaiveDate,
) -> Result<Collaboration, EngineError> {
    let assignments = records
        .iter()
        .map(|record| record.resolve(parser))
        .collect::<Result<Vec<Assignment>, _>>()?;

    let groups = group_by_project(&assignments);
    let pairs_evaluated: usize = groups
        .iter()
        .map(|g| g.members.len() * g.members.len().saturating_sub(1) / 2)
        .sum();

    debug!(
        records = assignments.len(),
        projects = groups.len(),
        pairs_evaluated,
        %today,
        "grouped assignments"
    );

    let map = aggregate(&groups, today);
    let top = select_top(&map);

    debug!(pairs = map.len(), top = ?top.pair, total = top.total_days, "aggregated");

    Ok(Collaboration {
        stats: RunStats {
            records: assignments.len(),
            projects: groups.len(),
            pairs_evaluated,
        },
        map,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CollaborationEntry, PairKey};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn r(emp: &str, project: &str, from: &str, to: Option<&str>) -> Record {
        Record::new(emp, project, from, to)
    }

    fn run(records: &[Record], today: NaiveDate) -> Collaboration {
        compute(records, &DateParser::default(), today).unwrap()
    }

    #[test]
    fn two_employees_partial_overlap() {
        let records = vec![
            r("A", "P1", "2023-01-01", Some("2023-01-10")),
            r("B", "P1", "2023-01-05", Some("2023-01-15")),
        ];
        let result = run(&records, d(2023, 6, 1));
        let ab = PairKey::new("A", "B").unwrap();
        assert_eq!(
            result.map.get(&ab).unwrap(),
            &[CollaborationEntry {
                project: "P1".to_string(),
                days: 5
            }]
        );
        assert_eq!(result.top.pair, Some(ab));
        assert_eq!(result.top.total_days, 5);
    }

    #[test]
    fn disjoint_ranges_give_empty_result() {
        let records = vec![
            r("A", "P1", "2023-01-01", Some("2023-01-10")),
            r("B", "P1", "2023-02-01", Some("2023-02-10")),
        ];
        let result = run(&records, d(2023, 6, 1));
        assert!(result.map.is_empty());
        assert!(result.top.is_empty());
        assert_eq!(result.top.total_days, 0);
    }

    #[test]
    fn ongoing_assignment_ends_on_reference_date() {
        let records = vec![
            r("A", "P1", "2023-01-01", Some("null")),
            r("B", "P1", "2023-01-01", Some("2023-01-05")),
        ];
        let result = run(&records, d(2023, 1, 10));
        assert_eq!(result.top.total_days, 4);
    }

    #[test]
    fn pair_with_extra_project_wins() {
        let records = vec![
            r("A", "P1", "2023-01-01", Some("2023-01-11")),
            r("B", "P1", "2023-01-01", Some("2023-01-11")),
            r("C", "P1", "2023-01-01", Some("2023-01-11")),
            r("A", "P2", "2023-02-01", Some("2023-02-04")),
            r("B", "P2", "2023-02-01", Some("2023-02-04")),
        ];
        let result = run(&records, d(2023, 6, 1));
        assert_eq!(result.top.pair, PairKey::new("A", "B"));
        assert_eq!(result.top.total_days, 13);
        let ac = PairKey::new("A", "C").unwrap();
        let bc = PairKey::new("B", "C").unwrap();
        assert_eq!(result.map.get(&ac).unwrap()[0].days, 10);
        assert_eq!(result.map.get(&bc).unwrap()[0].days, 10);
        assert_eq!(
            result.stats,
            RunStats {
                records: 5,
                projects: 2,
                pairs_evaluated: 4,
            }
        );
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let result = run(&[], d(2023, 1, 1));
        assert!(result.top.is_empty());
        assert_eq!(result.top.total_days, 0);
        assert_eq!(result.stats, RunStats::default());
    }

    #[test]
    fn malformed_date_fails_whole_run() {
        let records = vec![
            r("A", "P1", "2023-01-01", Some("2023-01-10")),
            r("B", "P1", "2023-01-05", Some("2023-01-15")),
            Record {
                row: 3,
                ..r("C", "P9", "not a date", None)
            },
        ];
        let err = compute(&records, &DateParser::default(), d(2023, 6, 1)).unwrap_err();
        let EngineError::MalformedDate { row, employee_id, .. } = err;
        assert_eq!(row, 3);
        assert_eq!(employee_id, "C");
    }

    #[test]
    fn malformed_date_reports_input_row_after_blank_row() {
        use crate::source::{CsvOptions, reader::read_records};

        let text = "EmpID,ProjectId,DateFrom,DateTo\n\
                    1,P,2020-01-01,\n\
                    ,,,\n\
                    2,P,bad,\n";
        let records = read_records(text.as_bytes(), &CsvOptions::default()).unwrap();
        let err = compute(&records, &DateParser::default(), d(2023, 6, 1)).unwrap_err();
        let EngineError::MalformedDate { row, value, .. } = err;
        assert_eq!(row, 3);
        assert_eq!(value, "bad");

        // same numbering the reader uses for empty fields
        let text = "EmpID,ProjectId,DateFrom,DateTo\n\
                    1,P,2020-01-01,\n\
                    ,,,\n\
                    ,P,2020-01-01,\n";
        let err = read_records(text.as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::MissingField { row: 3, .. }
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let records = vec![
            r("143", "12", "2013-11-01", Some("2014-01-05")),
            r("218", "10", "2012-05-16", None),
            r("143", "10", "2009-01-01", Some("2011-04-27")),
            r("218", "12", "2013-12-01", Some("2014-02-01")),
            r("311", "10", "2010-06-01", Some("2013-01-01")),
        ];
        let today = d(2020, 1, 1);
        assert_eq!(run(&records, today), run(&records, today));
    }
}
