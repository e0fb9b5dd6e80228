//! Shared test utilities for minimal-react-projects integration tests
//!
//! Stub `git` and `npm` executables stand in for the real tools so the
//! pipeline can run without network access.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// package.json shipped by the stub template
pub const TEMPLATE_PACKAGE_JSON: &str = r#"{
  "name": "minimal-react-boilerplate",
  "version": "1.0.0",
  "description": "Minimal react boilerplate",
  "main": "index.js",
  "scripts": {
    "dev": "webpack-dev-server --mode development",
    "build": "webpack --mode production"
  },
  "author": "Parth Prajapati",
  "license": "MIT",
  "dependencies": {
    "react": "^16.4.0",
    "react-dom": "^16.4.0"
  }
}"#;

/// Scratch area with a base directory and a separate bin directory for stubs
pub struct Sandbox {
    _temp: TempDir,
    pub base: Utf8PathBuf,
    pub bin: Utf8PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::try_from(temp.path().canonicalize().expect("canonical temp dir"))
            .expect("utf-8 temp dir");
        let base = root.join("work");
        let bin = root.join("bin");
        std::fs::create_dir(&base).unwrap();
        std::fs::create_dir(&bin).unwrap();
        Self {
            _temp: temp,
            base,
            bin,
        }
    }

    /// Log file a stub appends its arguments and working directory to
    pub fn log(&self, tool: &str) -> Utf8PathBuf {
        self.bin.join(format!("{}.log", tool))
    }

    /// Lines logged by a stub, empty when it never ran
    pub fn calls(&self, tool: &str) -> Vec<String> {
        std::fs::read_to_string(self.log(tool))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Stub git that materializes a fake boilerplate checkout
    pub fn git_ok(&self) -> Utf8PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
pwd >> "{log}"
[ "$1" = "clone" ] || exit 2
mkdir -p minimal-react-boilerplate/.git/objects
printf 'ref: refs/heads/%s\n' "$3" > minimal-react-boilerplate/.git/HEAD
cat > minimal-react-boilerplate/package.json <<'JSON'
{package}
JSON
echo '{{}}' > minimal-react-boilerplate/package-lock.json
printf '# minimal-react-boilerplate\n\nSetup notes\n' > minimal-react-boilerplate/README.md
"#,
            log = self.log("git"),
            package = TEMPLATE_PACKAGE_JSON
        );
        self.write_stub("git", &body)
    }

    /// Stub git that fails like an unknown branch
    pub fn git_failing(&self) -> Utf8PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
echo "fatal: Remote branch package-dev not found in upstream origin" >&2
exit 128
"#,
            log = self.log("git")
        );
        self.write_stub("git", &body)
    }

    /// Stub npm that records its invocation and succeeds
    pub fn npm_ok(&self) -> Utf8PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
pwd >> "{log}"
mkdir -p node_modules
"#,
            log = self.log("npm")
        );
        self.write_stub("npm", &body)
    }

    /// Stub npm that fails with a registry error
    pub fn npm_failing(&self) -> Utf8PathBuf {
        let body = format!(
            r#"echo "$@" >> "{log}"
echo "npm ERR! code E404" >&2
exit 1
"#,
            log = self.log("npm")
        );
        self.write_stub("npm", &body)
    }

    fn write_stub(&self, name: &str, body: &str) -> Utf8PathBuf {
        let path = self.bin.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }
}

/// Read a file under `dir` as a string
pub fn read(dir: &Utf8Path, file: &str) -> String {
    std::fs::read_to_string(dir.join(file)).unwrap()
}
