//! Checks that run before anything touches the network or the filesystem

use crate::error::{Error, Result};
use crate::naming::check_package_name;
use crate::types::{ProjectRequest, TemplateSource};
use camino::Utf8Path;
use tracing::debug;

/// Verify the request can be scaffolded without clobbering anything
///
/// # Errors
/// Returns error if:
/// - The name is not a valid npm package name for a new package
/// - An entry already exists at the project directory
/// - The template checkout directory is already taken by something else
pub fn check_preconditions(request: &ProjectRequest, source: &TemplateSource) -> Result<()> {
    debug!("Checking preconditions for {}", request.project_dir());

    check_package_name(request.name())?;

    let project_dir = request.project_dir();
    if entry_exists(&project_dir) {
        return Err(Error::project_exists(project_dir.as_str()));
    }

    let checkout = request.base_dir().join(source.checkout_dir_name()?);
    if checkout != project_dir && entry_exists(&checkout) {
        return Err(Error::checkout_exists(checkout.as_str()));
    }

    Ok(())
}

/// Any filesystem entry, including a dangling symlink
pub(crate) fn entry_exists(path: &Utf8Path) -> bool {
    path.symlink_metadata().is_ok()
}
