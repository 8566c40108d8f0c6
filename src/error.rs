use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while materializing a document, before the
/// validation pipeline runs. Entry points translate these into a single
/// synthetic report entry; they never cross the API as panics.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl InputError {
    /// Structural path the synthetic report entry is attributed to.
    pub fn path(&self) -> &'static str {
        match self {
            InputError::Json(_) => "root",
            InputError::Io { .. } => "file",
        }
    }
}
