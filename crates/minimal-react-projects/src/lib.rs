//! # minimal-react-projects
//!
//! Scaffolding library behind the `minimal-react` CLI:
//! - Precondition checks (npm package naming, directory collisions)
//! - Template fetch via `git clone`
//! - Materialization (rename, strip `.git` and lockfile, rewrite metadata)
//! - Dependency installation via `npm install`
//!
//! Each stage takes explicit paths; nothing here changes the process working
//! directory.
//!
//! # Examples
//!
//! ```no_run
//! use minimal_react_projects::{
//!     check_preconditions, clone_template, install_dependencies, materialize, ProjectRequest,
//!     TemplateSource, Toolchain,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ProjectRequest::new("my-app", "/home/me/code")?;
//! let source = TemplateSource::boilerplate();
//! let tools = Toolchain::default();
//!
//! check_preconditions(&request, &source)?;
//! clone_template(&source, request.base_dir(), &tools.git).await?;
//! let project = materialize(&request, &source).await?;
//! install_dependencies(&project.path, &tools.npm).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod materialize;
pub mod naming;
pub mod precondition;
pub mod process;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use git::clone_template;
pub use install::install_dependencies;
pub use materialize::materialize;
pub use naming::{check_package_name, validate_package_name, NameValidation};
pub use precondition::check_preconditions;
pub use types::{MaterializedProject, ProjectRequest, RemovedArtifacts, TemplateSource, Toolchain};
