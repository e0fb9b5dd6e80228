//! Completion report printed after a successful run

use camino::Utf8Path;
use console::style;

/// Lines of the success report for `name` created at `path`
pub fn completion_lines(name: &str, path: &Utf8Path) -> Vec<String> {
    let cmd = |s: &str| style(s.to_string()).cyan().to_string();

    vec![
        String::new(),
        style(format!("Success! Created {} at {}", name, path))
            .green()
            .to_string(),
        "Inside the directory you can run several commands:".to_string(),
        String::new(),
        format!("  {}", cmd("npm run dev")),
        "    Starts the development server".to_string(),
        String::new(),
        format!("  {}", cmd("npm run build")),
        "    Creates the final javascript bundle in ./output".to_string(),
        String::new(),
        "We suggest that you begin by typing:".to_string(),
        String::new(),
        format!("  {} {}", cmd("cd"), name),
        format!("  {}", cmd("npm run dev")),
    ]
}

/// Print the success report
pub fn print_completion(name: &str, path: &Utf8Path) {
    for line in completion_lines(name, path) {
        println!("{}", line);
    }
}
