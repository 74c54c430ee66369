use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::JqError;

fn spawn_error(e: io::Error) -> JqError {
    if e.kind() == io::ErrorKind::NotFound {
        JqError::NotFound
    } else {
        JqError::Spawn(e)
    }
}

/// Run a report's JSON through `jq <filter>` and return what jq printed
pub(crate) fn filter_json(json: &str, filter: &str) -> Result<String, JqError> {
    let mut child = Command::new("jq")
        .arg(filter)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(json.as_bytes()).map_err(JqError::Stdin)?;
    }

    let output = child.wait_with_output().map_err(JqError::Wait)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JqError::Filter(stderr.trim().to_string()));
    }
    String::from_utf8(output.stdout).map_err(JqError::Utf8)
}
