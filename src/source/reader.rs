//! Delimited-text reader producing engine records

use serde::Deserialize;
use std::io::Read;

use crate::consts::{COL_DATE_FROM, COL_DATE_TO, COL_EMPLOYEE, COL_PROJECT};
use crate::core::Record;
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct CsvOptions {
    pub(crate) delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvOptions {
    pub(crate) fn with_delimiter(delimiter: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = delimiter else {
            return Ok(Self::default());
        };
        let delimiter = match raw {
            "\\t" | "tab" => b'\t',
            s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
            _ => {
                return Err(AppError::InvalidDelimiter {
                    input: raw.to_string(),
                });
            }
        };
        Ok(Self { delimiter })
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "EmpID", default)]
    employee_id: String,
    #[serde(rename = "ProjectId", default)]
    project_id: String,
    #[serde(rename = "DateFrom", default)]
    date_from: String,
    #[serde(rename = "DateTo", default)]
    date_to: Option<String>,
}

impl CsvRow {
    fn is_blank(&self) -> bool {
        self.employee_id.is_empty()
            && self.project_id.is_empty()
            && self.date_from.is_empty()
            && self.date_to.as_deref().is_none_or(str::is_empty)
    }
}

/// Read records from CSV text with an `EmpID,ProjectId,DateFrom,DateTo` header.
///
/// `DateTo` may be missing from the header; every record is then ongoing.
/// Rows with only empty fields are skipped. Dates are left unparsed.
pub(crate) fn read_records<R: Read>(input: R, options: &CsvOptions) -> Result<Vec<Record>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in [COL_EMPLOYEE, COL_PROJECT, COL_DATE_FROM] {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn { column });
        }
    }
    if !headers.iter().any(|h| h == COL_DATE_TO) {
        tracing::debug!("no {COL_DATE_TO} column, treating every assignment as ongoing");
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        if row.is_blank() {
            continue;
        }
        let number = i + 1;
        if row.employee_id.is_empty() {
            return Err(AppError::MissingField {
                row: number,
                column: COL_EMPLOYEE,
            });
        }
        if row.project_id.is_empty() {
            return Err(AppError::MissingField {
                row: number,
                column: COL_PROJECT,
            });
        }
        records.push(Record {
            row: number,
            employee_id: row.employee_id,
            project_id: row.project_id,
            date_from: row.date_from,
            date_to: row.date_to,
        });
    }

    Ok(records)
}
