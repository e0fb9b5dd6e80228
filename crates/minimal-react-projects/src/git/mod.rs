//! Git operations module
//!
//! Fetches the template repository with the system `git` client. The clone
//! runs in an explicit base directory so the caller's working directory is
//! never touched.
//!
//! # Examples
//!
//! ```no_run
//! use minimal_react_projects::git::clone_template;
//! use minimal_react_projects::types::TemplateSource;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let checkout = clone_template(
//!     &TemplateSource::boilerplate(),
//!     Utf8Path::new("/tmp/workspace"),
//!     "git",
//! )
//! .await?;
//! assert!(checkout.ends_with("minimal-react-boilerplate"));
//! # Ok(())
//! # }
//! ```

mod clone;

pub use clone::clone_template;
