//! Parse phase: raw text and files -> JSON value -> typed `Workflow`.

pub mod types;

pub use types::*;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::InputError;
use crate::report::Issue;

/// Parse a document from a JSON string.
pub fn parse_json(text: &str) -> Result<Value, InputError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a document from a file.
pub fn read_document(path: &Path) -> Result<Value, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text)
}

/// Deserialize a schema-accepted value into the typed model.
///
/// The structural stage has already accepted `value`, so this cannot fail
/// for conforming documents; a mismatch is surfaced as a root-level error
/// rather than a panic.
pub fn conform(value: &Value) -> Result<Workflow, Issue> {
    serde_json::from_value(value.clone()).map_err(|e| {
        Issue::error(
            "root",
            format!("Document does not match the workflow model: {}", e),
        )
    })
}
