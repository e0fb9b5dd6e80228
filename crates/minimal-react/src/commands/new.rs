//! `minimal-react <project-directory>` command handler
//!
//! Runs the scaffolding stages strictly in order. The first failure is
//! reported on stdout and ends the run; earlier stages are not undone.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use minimal_react_projects::{
    check_preconditions, clone_template, install_dependencies, materialize, Error, ErrorKind,
    ProjectRequest, TemplateSource, Toolchain,
};

use crate::output;
use crate::report;

/// Create a new project from the boilerplate
pub async fn run(name: &str, tools: &Toolchain) -> Result<()> {
    let base_dir = match current_base_dir() {
        Ok(dir) => dir,
        Err(e) => {
            output::error(&format!("{:#}", e));
            return Err(e);
        }
    };

    let request = ProjectRequest::new(name, base_dir).map_err(|e| abort(e, name))?;
    let source = TemplateSource::boilerplate();

    check_preconditions(&request, &source).map_err(|e| abort(e, request.name()))?;

    output::blank();
    output::step("Fetching minimal-react-boilerplate...");
    let pb = output::spinner(&format!("Cloning {} ({})", source.repository_url, source.branch));
    let fetched = clone_template(&source, request.base_dir(), &tools.git).await;
    pb.finish_and_clear();
    fetched.map_err(|e| abort(e, request.name()))?;
    output::ok();

    output::blank();
    output::step(&format!("Setting up {}...", request.name()));
    let project = materialize(&request, &source)
        .await
        .map_err(|e| abort(e, request.name()))?;
    output::ok();
    output::blank();

    output::step("Installing dependencies...");
    let pb = output::spinner(&format!("{} install", tools.npm));
    let installed = install_dependencies(&project.path, &tools.npm).await;
    pb.finish_and_clear();
    installed.map_err(|e| abort(e, request.name()))?;
    output::ok();

    report::print_completion(&project.name, &project.path);
    Ok(())
}

fn current_base_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")
}

/// Report `err` for the stage it belongs to and hand it back for the exit code
fn abort(err: Error, name: &str) -> anyhow::Error {
    tracing::debug!("Aborting at {} stage: {:?}", err.kind(), err);

    match err.kind() {
        ErrorKind::Precondition => report_precondition(&err),
        ErrorKind::Fetch => {
            output::blank();
            output::err();
            output::error("Error while fetching minimal-react-boilerplate");
            output::error(&err.to_string());
        }
        ErrorKind::Materialization => {
            output::err();
            output::error(&format!("Error while setting up {}", name));
            output::error(&err.to_string());
        }
        ErrorKind::Install => {
            output::blank();
            output::err();
            output::error(&err.to_string());
        }
    }

    anyhow::Error::new(err)
}

fn report_precondition(err: &Error) {
    match err {
        Error::InvalidProjectName { name, reasons } => {
            output::error(&format!(
                "Could not create a project called \"{}\" because of npm naming restrictions:",
                name
            ));
            for reason in reasons {
                output::bullet(reason);
            }
        }
        Error::ProjectExists { path } => {
            output::error(&format!("The directory {} already exists.", path));
            output::error("Either try using a new directory name, or remove it.");
        }
        other => output::error(&other.to_string()),
    }
}
