//! Error types for minimal-react-projects

use std::fmt;
use thiserror::Error;

/// Result type alias using minimal-react-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target path or project name rejected before any external process ran
    Precondition,
    /// Template clone failed
    Fetch,
    /// Filesystem rewrite of the cloned template failed
    Materialization,
    /// Package manager install failed
    Install,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Precondition => "precondition",
            Self::Fetch => "fetch",
            Self::Materialization => "materialization",
            Self::Install => "install",
        };
        f.write_str(s)
    }
}

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project directory already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Template checkout directory is in the way of the clone
    #[error("Directory {path} already exists and would collide with the template checkout")]
    CheckoutExists { path: String },

    /// Project name failed package naming rules
    #[error("Invalid project name: {name}\n{}", format_reasons(.reasons))]
    InvalidProjectName { name: String, reasons: Vec<String> },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Clone failed
    #[error("Failed to clone repository: {message}")]
    CloneFailed { message: String },

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String, stage: ErrorKind },

    /// Clone reported success but the checkout is missing
    #[error("Template checkout not found at: {path}")]
    CheckoutMissing { path: String },

    /// Filesystem step during materialization failed
    #[error("Failed to {action}: {source}")]
    Materialize {
        action: String,
        #[source]
        source: std::io::Error,
    },

    /// package.json is not a JSON object
    #[error("Invalid package manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Dependency installation failed
    #[error("Dependency installation failed: {message}")]
    InstallFailed { message: String },

    /// Process execution error
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),
}

fn format_reasons(reasons: &[String]) -> String {
    reasons
        .iter()
        .map(|r| format!("  * {}", r))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Stage of the scaffolding pipeline this error aborts
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectExists { .. }
            | Self::CheckoutExists { .. }
            | Self::InvalidProjectName { .. }
            | Self::InvalidPath { .. } => ErrorKind::Precondition,
            Self::InvalidRepoUrl { .. } | Self::CloneFailed { .. } => ErrorKind::Fetch,
            Self::CommandNotFound { stage, .. } => *stage,
            Self::CheckoutMissing { .. } | Self::Materialize { .. } | Self::InvalidManifest { .. } => {
                ErrorKind::Materialization
            }
            Self::InstallFailed { .. } | Self::ProcessExecution(_) => ErrorKind::Install,
        }
    }

    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a checkout exists error
    pub fn checkout_exists(path: impl Into<String>) -> Self {
        Self::CheckoutExists { path: path.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>, reasons: Vec<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reasons,
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>, stage: ErrorKind) -> Self {
        Self::CommandNotFound {
            command: command.into(),
            stage,
        }
    }

    /// Create a checkout missing error
    pub fn checkout_missing(path: impl Into<String>) -> Self {
        Self::CheckoutMissing { path: path.into() }
    }

    /// Wrap an I/O failure with the materialization step that caused it
    pub fn materialize(action: impl Into<String>, source: std::io::Error) -> Self {
        Self::Materialize {
            action: action.into(),
            source,
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(message: impl Into<String>) -> Self {
        Self::InstallFailed {
            message: message.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }
}
