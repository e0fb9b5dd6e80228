//! npm package name validation
//!
//! Mirrors the rules npm applies to names of newly published packages. A name
//! is usable for a new project only when it produces neither errors nor
//! warnings; both kinds are reported so the user sees every problem at once.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static SCOPED_PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@([^/]+?)/)?([^/]+?)$").expect("scoped package regex is valid"));

/// Maximum length npm accepts for new package names
pub const MAX_NAME_LENGTH: usize = 214;

const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Node.js built-in module names
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of checking a package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    /// Violations that make the name invalid for any package
    pub errors: Vec<String>,
    /// Violations tolerated for legacy packages but not for new ones
    pub warnings: Vec<String>,
}

impl NameValidation {
    /// Name can be used for a freshly created package
    pub fn is_valid_for_new_package(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Every reported problem, errors first
    pub fn reasons(&self) -> Vec<String> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .cloned()
            .collect()
    }
}

/// Check `name` against npm's package naming rules
pub fn validate_package_name(name: &str) -> NameValidation {
    let mut result = NameValidation::default();

    if name.is_empty() {
        result
            .errors
            .push("name length must be greater than zero".to_string());
    }

    if name.starts_with('.') {
        result
            .errors
            .push("name cannot start with a period".to_string());
    }

    if name.starts_with('_') {
        result
            .errors
            .push("name cannot start with an underscore".to_string());
    }

    if name.trim() != name {
        result
            .errors
            .push("name cannot contain leading or trailing spaces".to_string());
    }

    let lower = name.to_lowercase();

    for blacklisted in BLACKLISTED_NAMES {
        if lower == *blacklisted {
            result
                .errors
                .push(format!("{} is a blacklisted name", blacklisted));
        }
    }

    if CORE_MODULES.contains(&lower.as_str()) {
        result
            .warnings
            .push(format!("{} is a core module name", name));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        result.warnings.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    if lower != name {
        result
            .warnings
            .push("name can no longer contain capital letters".to_string());
    }

    let last_segment = name.rsplit('/').next().unwrap_or(name);
    if last_segment.contains(SPECIAL_CHARACTERS) {
        result
            .warnings
            .push("name can no longer contain special characters (\"~'!()*\")".to_string());
    }

    if !is_url_friendly(name) && !is_url_friendly_scoped(name) {
        result
            .errors
            .push("name can only contain URL-friendly characters".to_string());
    }

    result
}

/// Reject `name` unless it is valid for a new package
///
/// # Errors
/// Returns [`Error::InvalidProjectName`] listing every violated rule.
pub fn check_package_name(name: &str) -> Result<()> {
    let validation = validate_package_name(name);
    if validation.is_valid_for_new_package() {
        Ok(())
    } else {
        Err(Error::invalid_project_name(name, validation.reasons()))
    }
}

/// Characters `encodeURIComponent` leaves untouched
fn is_url_friendly(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

fn is_url_friendly_scoped(name: &str) -> bool {
    match SCOPED_PACKAGE_RE.captures(name) {
        Some(caps) => {
            let scope_ok = caps.get(1).is_none_or(|m| is_url_friendly(m.as_str()));
            let pkg_ok = caps.get(2).is_some_and(|m| is_url_friendly(m.as_str()));
            scope_ok && pkg_ok
        }
        None => false,
    }
}
