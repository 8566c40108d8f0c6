//! Validation report model shared by all pipeline stages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

/// A single finding, attributed to a location within the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: String,
    pub message: String,
    pub kind: IssueKind,
}

impl Issue {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            path: path.into(),
            message: message.into(),
            kind: IssueKind::Error,
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            path: path.into(),
            message: message.into(),
            kind: IssueKind::Warning,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            IssueKind::Error => "error",
            IssueKind::Warning => "warning",
        };
        write!(f, "[{}] {}: {}", kind, self.path, self.message)
    }
}

/// The outcome of validating one document.
///
/// `valid` reflects the error list only; warnings never fail a document.
/// Promoting warnings to failures (strict mode) is a caller decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(errors: Vec<Issue>, warnings: Vec<Issue>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Report carrying a single synthetic error, for boundary failures
    /// (unreadable file, malformed JSON) that preclude validation proper.
    pub fn from_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationReport::new(vec![Issue::error(path, message)], Vec::new())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
