//! Terminal output utilities
//!
//! All user feedback, including failures, goes to stdout. Diagnostic logs
//! from `tracing` go to stderr.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a stage announcement
pub fn step(msg: &str) {
    println!("{}", style(msg).green());
}

/// Print the marker for a finished stage
pub fn ok() {
    println!("{}", style(" OK ").white().on_green());
}

/// Print the marker for a failed stage
pub fn err() {
    println!("{}", style(" ERR ").white().on_red());
}

/// Print an error message
pub fn error(msg: &str) {
    println!("{}", style(msg).red());
}

/// Print a bulleted detail line
pub fn bullet(msg: &str) {
    println!("  {} {}", style("*").red(), msg);
}

/// Print a blank line
pub fn blank() {
    println!();
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(spinner_style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
