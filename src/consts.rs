/// ISO date, the first shape tried for record dates and `--as-of`: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Literal `DateTo` value meaning "still assigned" (compared case-insensitively)
pub(crate) const ONGOING: &str = "null";

/// File extensions accepted as input
pub(crate) const ALLOWED_EXTENSIONS: &[&str] = &["csv"];

/// Input column headers
pub(crate) const COL_EMPLOYEE: &str = "EmpID";
pub(crate) const COL_PROJECT: &str = "ProjectId";
pub(crate) const COL_DATE_FROM: &str = "DateFrom";
pub(crate) const COL_DATE_TO: &str = "DateTo";
