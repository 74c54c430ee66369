use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Date shapes accepted in `DateFrom`/`DateTo` unless overridden
const DEFAULT_FORMATS: &[&str] = &[
    DATE_FORMAT,
    "%Y%m%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses record dates against an ordered list of chrono formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateParser {
    formats: Vec<String>,
    accept_datetimes: bool,
}

impl Default for DateParser {
    fn default() -> Self {
        Self {
            formats: DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
            accept_datetimes: true,
        }
    }
}

impl DateParser {
    /// Use only `formats`; an empty list falls back to the defaults
    pub(crate) fn with_formats(formats: &[String]) -> Self {
        if formats.is_empty() {
            return Self::default();
        }
        Self {
            formats: formats.to_vec(),
            accept_datetimes: false,
        }
    }

    pub(crate) fn parse(&self, s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        for fmt in &self.formats {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return Some(d);
            }
        }

        if !self.accept_datetimes {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }
}

/// Parse a date given on the command line
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}
