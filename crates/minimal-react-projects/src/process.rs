//! Helpers for the external programs the pipeline runs

use crate::error::{Error, ErrorKind, Result};
use std::path::PathBuf;
use std::process::Output;
use tracing::debug;

/// Resolve `program` on PATH (or as a path) before spawning it
///
/// `stage` tags the [`Error::CommandNotFound`] so callers can tell a missing
/// `git` from a missing `npm`.
pub fn resolve_program(program: &str, stage: ErrorKind) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!("Resolved {} to {}", program, path.display());
            Ok(path)
        }
        Err(_) => Err(Error::command_not_found(program, stage)),
    }
}

/// Human-readable reason a finished child process failed
///
/// Prefers trimmed stderr and falls back to the exit status.
pub(crate) fn failure_message(program: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    match stderr.trim() {
        "" => format!("{} exited with {}", program, output.status),
        trimmed => trimmed.to_string(),
    }
}
