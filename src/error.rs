use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which date column of a record failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateField {
    From,
    To,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::From => f.write_str("DateFrom"),
            DateField::To => f.write_str("DateTo"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum EngineError {
    #[error(
        "Malformed {field} \"{value}\" in record {row} (employee {employee_id}, project {project_id})"
    )]
    MalformedDate {
        row: usize,
        employee_id: String,
        project_id: String,
        field: DateField,
        value: String,
    },
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid delimiter \"{input}\" (expected a single ASCII character)")]
    InvalidDelimiter { input: String },

    #[error("Enter a valid file (pass the path of a CSV file)")]
    NoInput,

    #[error("Please input a csv file: {}", path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing column \"{column}\" in header")]
    MissingColumn { column: &'static str },

    #[error("Empty {column} in record {row}")]
    MissingField { row: usize, column: &'static str },

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_unsupported_file() {
        let e = AppError::UnsupportedFile {
            path: PathBuf::from("staff.xlsx"),
        };
        assert_eq!(e.to_string(), "Please input a csv file: staff.xlsx");
    }

    #[test]
    fn app_error_display_missing_column() {
        let e = AppError::MissingColumn { column: "EmpID" };
        assert_eq!(e.to_string(), r#"Missing column "EmpID" in header"#);
    }

    #[test]
    fn engine_error_display() {
        let e = EngineError::MalformedDate {
            row: 3,
            employee_id: "143".to_string(),
            project_id: "12".to_string(),
            field: DateField::To,
            value: "soon".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Malformed DateTo "soon" in record 3 (employee 143, project 12)"#
        );
    }

    #[test]
    fn app_error_from_engine_error() {
        let engine = EngineError::MalformedDate {
            row: 0,
            employee_id: "1".to_string(),
            project_id: "P".to_string(),
            field: DateField::From,
            value: "x".to_string(),
        };
        let app: AppError = engine.into();
        assert!(app.to_string().starts_with("Invalid input: Malformed DateFrom"));
    }

    #[test]
    fn jq_error_not_found() {
        assert_eq!(
            JqError::NotFound.to_string(),
            "jq not found. Please install jq to use --jq option."
        );
    }

    #[test]
    fn app_error_from_jq_error() {
        let jq = JqError::Filter("bad filter".to_string());
        let app: AppError = jq.into();
        assert_eq!(app.to_string(), "jq error: bad filter");
    }
}
