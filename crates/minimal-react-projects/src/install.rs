//! Dependency installation with the project's package manager

use crate::error::{Error, ErrorKind, Result};
use crate::process::{failure_message, resolve_program};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Arguments passed to the package manager
pub const INSTALL_ARGS: &[&str] = &["install"];

/// Install project dependencies
///
/// Runs `<npm> install` once inside `project_dir` and waits for it.
///
/// # Arguments
/// * `project_dir` - Materialized project directory
/// * `npm` - Package manager executable name or path
///
/// # Errors
/// Returns error if:
/// - The package manager cannot be found or spawned
/// - The install exits non-zero
pub async fn install_dependencies(project_dir: &Utf8Path, npm: &str) -> Result<()> {
    info!("Installing dependencies in {}", project_dir);

    let program = resolve_program(npm, ErrorKind::Install)?;

    debug!(
        "Running: {} {} in {}",
        program.display(),
        INSTALL_ARGS.join(" "),
        project_dir
    );
    let output = Command::new(&program)
        .args(INSTALL_ARGS)
        .current_dir(project_dir)
        .output()
        .await
        .map_err(|e| Error::process_execution(format!("Failed to execute {}: {}", npm, e)))?;

    if !output.status.success() {
        return Err(Error::install_failed(failure_message(npm, &output)));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        debug!("Install output: {}", stdout.trim());
    }

    info!("Dependencies installed successfully");
    Ok(())
}
