use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::consts::ALLOWED_EXTENSIONS;
use crate::core::Record;
use crate::error::AppError;
use crate::source::reader::{CsvOptions, read_records};

/// Reject files whose extension is not in the allow-list (case-insensitive)
pub(crate) fn validate_extension(path: &Path) -> Result<(), AppError> {
    let allowed = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });

    if allowed {
        Ok(())
    } else {
        Err(AppError::UnsupportedFile {
            path: path.to_path_buf(),
        })
    }
}

/// Open `path` and read every record in it
pub(crate) fn load_records(
    path: &Path,
    options: &CsvOptions,
    check_extension: bool,
) -> Result<Vec<Record>, AppError> {
    if check_extension {
        validate_extension(path)?;
    }

    let start = Instant::now();
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(BufReader::new(file), options)?;

    debug!(
        path = %path.display(),
        records = records.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "loaded records"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate_extension(Path::new("staff.csv")).is_ok());
        assert!(validate_extension(Path::new("dir/STAFF.CSV")).is_ok());
    }

    #[test]
    fn extension_check_rejects_others() {
        assert!(validate_extension(Path::new("staff.xlsx")).is_err());
        assert!(validate_extension(Path::new("staff")).is_err());
        assert!(validate_extension(Path::new("csv")).is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "EmpID,ProjectId,DateFrom,DateTo\n1,P,2020-01-01,NULL\n").unwrap();
        let records = load_records(&path, &CsvOptions::default(), true).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn load_skips_extension_check_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.txt");
        fs::write(&path, "EmpID,ProjectId,DateFrom,DateTo\n1,P,2020-01-01,NULL\n").unwrap();
        assert!(matches!(
            load_records(&path, &CsvOptions::default(), true),
            Err(AppError::UnsupportedFile { .. })
        ));
        assert!(load_records(&path, &CsvOptions::default(), false).is_ok());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/pairdays/staff.csv");
        assert!(matches!(
            load_records(&path, &CsvOptions::default(), true),
            Err(AppError::Io { .. })
        ));
    }
}
