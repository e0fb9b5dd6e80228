//! package.json and README rewriting

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Package metadata file at the project root
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Readme replaced with a bare heading
pub const README: &str = "README.md";

/// Rewrite package.json text for a new project
///
/// Sets `name`, blanks `description` and `author`, and leaves every other
/// key in its original position. Keys missing from the template are appended.
/// Output uses 2-space indentation with no trailing newline.
///
/// `path` is only used in error messages.
pub fn rewrite_package_json(content: &str, name: &str, path: &str) -> Result<String> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| Error::invalid_manifest(path, e.to_string()))?;

    let mut manifest: Map<String, Value> = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::invalid_manifest(
                path,
                format!("expected a JSON object, found {}", json_type(&other)),
            ))
        }
    };

    manifest.insert("name".to_string(), Value::String(name.to_string()));
    manifest.insert("description".to_string(), Value::String(String::new()));
    manifest.insert("author".to_string(), Value::String(String::new()));

    serde_json::to_string_pretty(&Value::Object(manifest))
        .map_err(|e| Error::invalid_manifest(path, e.to_string()))
}

/// Contents of the regenerated README
pub fn readme_contents(name: &str) -> String {
    format!("# {}", name)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
