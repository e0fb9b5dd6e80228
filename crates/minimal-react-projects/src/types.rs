//! Core types for project scaffolding

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Repository the boilerplate is cloned from
pub const TEMPLATE_REPO_URL: &str =
    "https://github.com/prajapati-parth/minimal-react-boilerplate.git";

/// Branch of the boilerplate carrying the packaged template
pub const TEMPLATE_BRANCH: &str = "package-dev";

/// A validated-by-construction request to scaffold one project
///
/// `name` is always a single path component. `base_dir` is absolute and is
/// where both the clone and the final project directory live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
    base_dir: Utf8PathBuf,
}

impl ProjectRequest {
    /// Build a request from the raw `<project-directory>` argument
    ///
    /// Like `path.basename(path.resolve(arg))`, only the last component of the
    /// argument names the project; trailing separators are ignored.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPath`] when `base_dir` is relative or the
    /// argument has no usable final component (e.g. `..` or `/`).
    pub fn new(raw: &str, base_dir: impl Into<Utf8PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_absolute() {
            return Err(Error::invalid_path(base_dir.as_str()));
        }

        let name = Utf8Path::new(raw)
            .file_name()
            .ok_or_else(|| Error::invalid_path(raw))?
            .to_string();

        Ok(Self { name, base_dir })
    }

    /// Project (and package) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the tool operates in
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Absolute path of the project once materialized
    pub fn project_dir(&self) -> Utf8PathBuf {
        self.base_dir.join(&self.name)
    }
}

/// Where the template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Clone URL
    pub repository_url: String,
    /// Branch to check out
    pub branch: String,
}

impl TemplateSource {
    /// The minimal-react-boilerplate template
    pub fn boilerplate() -> Self {
        Self {
            repository_url: TEMPLATE_REPO_URL.to_string(),
            branch: TEMPLATE_BRANCH.to_string(),
        }
    }

    /// Directory name `git clone` picks when no destination is given
    ///
    /// # Examples
    /// - https://github.com/user/repo.git -> repo
    /// - git@github.com:user/repo.git -> repo
    pub fn checkout_dir_name(&self) -> Result<String> {
        let url = self.repository_url.trim_end_matches('/');
        let name = url
            .rsplit(['/', ':'])
            .next()
            .ok_or_else(|| Error::invalid_repo_url(url))?
            .trim_end_matches(".git");

        if name.is_empty() {
            return Err(Error::invalid_repo_url(url));
        }

        Ok(name.to_string())
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self::boilerplate()
    }
}

/// External programs the pipeline shells out to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Version-control client used for the fetch
    pub git: String,
    /// Package manager used for the install
    pub npm: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            npm: "npm".to_string(),
        }
    }
}

/// Version-control and lockfile artifacts stripped from the template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovedArtifacts {
    /// `.git` directory was present and deleted
    pub git_dir: bool,
    /// `package-lock.json` was present and deleted
    pub lockfile: bool,
}

/// A template rewritten into the user's project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedProject {
    /// Package name written to package.json
    pub name: String,
    /// Absolute project directory
    pub path: Utf8PathBuf,
    /// What was stripped from the checkout
    pub removed: RemovedArtifacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_takes_last_component() {
        let req = ProjectRequest::new("apps/my-app/", "/work").unwrap();
        assert_eq!(req.name(), "my-app");
        assert_eq!(req.project_dir(), Utf8PathBuf::from("/work/my-app"));
    }

    #[test]
    fn test_request_rejects_unusable_names() {
        assert!(ProjectRequest::new("..", "/work").is_err());
        assert!(ProjectRequest::new("/", "/work").is_err());
        assert!(ProjectRequest::new("", "/work").is_err());
    }

    #[test]
    fn test_request_requires_absolute_base() {
        let err = ProjectRequest::new("my-app", "relative/dir").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_checkout_dir_name() {
        assert_eq!(
            TemplateSource::boilerplate().checkout_dir_name().unwrap(),
            "minimal-react-boilerplate"
        );

        let ssh = TemplateSource {
            repository_url: "git@github.com:user/my-project.git".to_string(),
            branch: "main".to_string(),
        };
        assert_eq!(ssh.checkout_dir_name().unwrap(), "my-project");

        let bare = TemplateSource {
            repository_url: "https://github.com/user/repo/".to_string(),
            branch: "main".to_string(),
        };
        assert_eq!(bare.checkout_dir_name().unwrap(), "repo");
    }

    #[test]
    fn test_toolchain_default() {
        let tools = Toolchain::default();
        assert_eq!(tools.git, "git");
        assert_eq!(tools.npm, "npm");
    }
}
