//! Template repository cloning

use crate::error::{Error, ErrorKind, Result};
use crate::process::{failure_message, resolve_program};
use crate::types::TemplateSource;
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Clone a single branch of the template into `base_dir`
///
/// The checkout lands in git's default directory name for the URL, see
/// [`TemplateSource::checkout_dir_name`].
///
/// # Arguments
/// * `source` - Repository URL and branch to clone
/// * `base_dir` - Directory the clone runs in
/// * `git` - Git executable name or path
///
/// # Returns
/// Path to the fresh checkout
///
/// # Errors
/// Returns error if:
/// - `git` cannot be found
/// - Invalid repository URL
/// - The clone exits non-zero (network failure, unknown branch, ...)
pub async fn clone_template(
    source: &TemplateSource,
    base_dir: &Utf8Path,
    git: &str,
) -> Result<Utf8PathBuf> {
    info!(
        "Cloning template: {} ({}) into {}",
        source.repository_url, source.branch, base_dir
    );

    if !is_valid_repo_url(&source.repository_url) {
        return Err(Error::invalid_repo_url(&source.repository_url));
    }

    let checkout = base_dir.join(source.checkout_dir_name()?);
    let program = resolve_program(git, ErrorKind::Fetch)?;

    debug!(
        "Running: {} clone -b {} {}",
        program.display(),
        source.branch,
        source.repository_url
    );
    let output = Command::new(&program)
        .current_dir(base_dir)
        .arg("clone")
        .arg("-b")
        .arg(&source.branch)
        .arg(&source.repository_url)
        .output()
        .await
        .map_err(|e| Error::clone_failed(format!("could not run {}: {}", git, e)))?;

    if !output.status.success() {
        return Err(Error::clone_failed(failure_message(git, &output)));
    }

    info!("Template cloned to {}", checkout);
    Ok(checkout)
}

/// Validate if a string is a valid repository URL
fn is_valid_repo_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("git@") || url.starts_with("http://")
}
