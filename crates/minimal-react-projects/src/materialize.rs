//! Turning a fresh template checkout into the user's project
//!
//! Every step works on absolute paths under [`ProjectRequest::project_dir`].
//! A failure part-way through leaves whatever was already renamed, deleted,
//! or rewritten in place; nothing is rolled back.

use crate::error::{Error, Result};
use crate::manifest::{readme_contents, rewrite_package_json, PACKAGE_MANIFEST, README};
use crate::precondition::entry_exists;
use crate::types::{MaterializedProject, ProjectRequest, RemovedArtifacts, TemplateSource};
use camino::Utf8Path;
use std::io::ErrorKind as IoErrorKind;
use tracing::{debug, info};

/// Version-control metadata directory of the checkout
pub const GIT_DIR: &str = ".git";

/// Lockfile regenerated by the first install
pub const LOCKFILE: &str = "package-lock.json";

/// Rename the checkout and rewrite it for `request`
///
/// # Errors
/// Returns error if:
/// - The checkout is missing or the project directory is already taken
/// - Any rename, delete, read, or write fails
/// - package.json is not a JSON object
pub async fn materialize(
    request: &ProjectRequest,
    source: &TemplateSource,
) -> Result<MaterializedProject> {
    let checkout = request.base_dir().join(source.checkout_dir_name()?);
    let project_dir = request.project_dir();

    info!("Setting up {} at {}", request.name(), project_dir);

    if !entry_exists(&checkout) {
        return Err(Error::checkout_missing(checkout.as_str()));
    }

    if checkout != project_dir {
        if entry_exists(&project_dir) {
            return Err(Error::project_exists(project_dir.as_str()));
        }

        debug!("Renaming {} -> {}", checkout, project_dir);
        tokio::fs::rename(&checkout, &project_dir)
            .await
            .map_err(|e| {
                Error::materialize(format!("rename {} to {}", checkout, project_dir), e)
            })?;
    }

    let removed = RemovedArtifacts {
        git_dir: remove_if_present(&project_dir.join(GIT_DIR)).await?,
        lockfile: remove_if_present(&project_dir.join(LOCKFILE)).await?,
    };
    debug!("Removed artifacts: {:?}", removed);

    rewrite_manifest(&project_dir, request.name()).await?;
    rewrite_readme(&project_dir, request.name()).await?;

    info!("Project {} materialized", request.name());
    Ok(MaterializedProject {
        name: request.name().to_string(),
        path: project_dir,
        removed,
    })
}

/// Delete a file or directory tree; a missing entry is not an error
///
/// Returns whether anything was deleted.
async fn remove_if_present(path: &Utf8Path) -> Result<bool> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::materialize(format!("inspect {}", path), e)),
    };

    let result = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };

    match result {
        Ok(()) => {
            debug!("Removed {}", path);
            Ok(true)
        }
        Err(e) if e.kind() == IoErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::materialize(format!("remove {}", path), e)),
    }
}

async fn rewrite_manifest(project_dir: &Utf8Path, name: &str) -> Result<()> {
    let path = project_dir.join(PACKAGE_MANIFEST);

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| Error::materialize(format!("read {}", path), e))?;

    let rewritten = rewrite_package_json(&content, name, path.as_str())?;

    tokio::fs::write(&path, rewritten)
        .await
        .map_err(|e| Error::materialize(format!("write {}", path), e))?;

    debug!("Rewrote {}", path);
    Ok(())
}

async fn rewrite_readme(project_dir: &Utf8Path, name: &str) -> Result<()> {
    let path = project_dir.join(README);

    tokio::fs::write(&path, readme_contents(name))
        .await
        .map_err(|e| Error::materialize(format!("write {}", path), e))?;

    debug!("Rewrote {}", path);
    Ok(())
}
