//! Optional prettier pass over generated sources.

use crate::CliError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Format TypeScript through `prettier`, which must be on `PATH`.
///
/// `path` only tells prettier which file it is formatting; nothing is read
/// from or written to it.
pub fn prettier(source: &str, path: &Path) -> Result<String, CliError> {
    let mut child = Command::new("prettier")
        .args(["--parser", "typescript", "--no-semi", "--stdin-filepath"])
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| CliError::Format(format!("cannot run prettier: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| CliError::Format(e.to_string()))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| CliError::Format(e.to_string()))?;
    if !output.status.success() {
        return Err(CliError::Format(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    String::from_utf8(output.stdout).map_err(|e| CliError::Format(e.to_string()))
}
