//! Shared helpers for minimal-react CLI tests

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch area: `work/` is the cwd of the CLI, `bin/` holds stub tools
pub struct Sandbox {
    _temp: TempDir,
    pub work: PathBuf,
    pub bin: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().canonicalize().expect("canonical temp dir");
        let work = root.join("work");
        let bin = root.join("bin");
        std::fs::create_dir(&work).unwrap();
        std::fs::create_dir(&bin).unwrap();
        Self {
            _temp: temp,
            work,
            bin,
        }
    }

    pub fn log(&self, tool: &str) -> PathBuf {
        self.bin.join(format!("{}.log", tool))
    }

    /// Lines logged by a stub, empty when it never ran
    pub fn calls(&self, tool: &str) -> Vec<String> {
        std::fs::read_to_string(self.log(tool))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Entries in the CLI's working directory
    pub fn work_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.work)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Stub git producing a boilerplate checkout
    pub fn git_ok(&self) -> PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
mkdir -p minimal-react-boilerplate/.git
cat > minimal-react-boilerplate/package.json <<'JSON'
{{
  "name": "minimal-react-boilerplate",
  "version": "1.0.0",
  "description": "Minimal react boilerplate",
  "scripts": {{ "dev": "webpack-dev-server" }},
  "author": "Parth Prajapati",
  "license": "MIT"
}}
JSON
echo '{{}}' > minimal-react-boilerplate/package-lock.json
echo '# minimal-react-boilerplate' > minimal-react-boilerplate/README.md
"#,
            log = self.log("git").display()
        );
        self.write_stub("git", &body)
    }

    /// Stub git failing like a network error
    pub fn git_failing(&self) -> PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
echo "fatal: unable to access 'https://github.com/': Could not resolve host: github.com" >&2
exit 128
"#,
            log = self.log("git").display()
        );
        self.write_stub("git", &body)
    }

    /// Stub npm that records where it ran
    pub fn npm_ok(&self) -> PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
pwd >> "{log}"
"#,
            log = self.log("npm").display()
        );
        self.write_stub("npm", &body)
    }

    /// Stub npm failing the install
    pub fn npm_failing(&self) -> PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
echo "npm ERR! network request failed" >&2
exit 1
"#,
            log = self.log("npm").display()
        );
        self.write_stub("npm", &body)
    }

    /// Run the CLI inside `work/` with the given stub tools
    pub fn run(&self, args: &[&str], git: &Path, npm: &Path) -> Output {
        Command::new(env!("CARGO_BIN_EXE_minimal-react"))
            .args(args)
            .current_dir(&self.work)
            .env("MINIMAL_REACT_GIT", git)
            .env("MINIMAL_REACT_NPM", npm)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("run minimal-react")
    }

    fn write_stub(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}

/// Stdout with ANSI styling removed
pub fn stdout(output: &Output) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).into_owned()
}
