//! CLI argument parsing with clap

use clap::{CommandFactory, Parser};
use console::style;
use minimal_react_projects::Toolchain;

const AFTER_HELP: &str = "Only <project-directory> is required as argument.

If you have any problems, please file an issue";

/// Create a React project from the minimal-react-boilerplate template
#[derive(Parser, Debug)]
#[command(name = "minimal-react")]
#[command(version, about, long_about = None)]
#[command(override_usage = "minimal-react <project-directory> [options]")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to create; its name becomes the package name
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors in diagnostic logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Git executable used to fetch the template
    #[arg(long, env = "MINIMAL_REACT_GIT", default_value = "git", hide = true)]
    pub git: String,

    /// npm executable used to install dependencies
    #[arg(long, env = "MINIMAL_REACT_NPM", default_value = "npm", hide = true)]
    pub npm: String,
}

impl Cli {
    /// External programs selected for this run
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            git: self.git.clone(),
            npm: self.npm.clone(),
        }
    }
}

/// Guidance printed when `<project-directory>` is missing
pub fn missing_directory_help() -> Vec<String> {
    let command = Cli::command();
    let program = style(command.get_name()).blue();
    let placeholder = style("<project-directory>").green();

    vec![
        String::new(),
        "Please specify project directory:".to_string(),
        format!("     {} {}", program, placeholder),
        String::new(),
        "For example:".to_string(),
        format!("     {} {}", program, style("my-first-react-app").green()),
        String::new(),
        format!(
            "Run {} to see all options",
            style(format!("{} --help", command.get_name())).blue()
        ),
    ]
}
