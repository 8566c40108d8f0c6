//! Structural stage: conform the raw document to the workflow schema.

use serde_json::Value;

use crate::parse::{self, Workflow};
use crate::report::Issue;
use crate::schema;

/// Check the raw document against the workflow schema.
///
/// Returns the typed workflow when the document conforms, otherwise one
/// error per schema violation. Later stages presuppose a conforming shape
/// and must not run on `Err`.
pub fn check_structure(doc: &Value) -> Result<Workflow, Vec<Issue>> {
    let mut errors = Vec::new();
    schema::check(doc, &schema::workflow_schema(), "root", &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }
    parse::conform(doc).map_err(|issue| vec![issue])
}

/// Advisory findings that ride along with the structural stage. An empty
/// workflow is schema-valid, so this never affects the verdict.
pub fn structural_warnings(workflow: &Workflow) -> Vec<Issue> {
    let mut warnings = Vec::new();
    if workflow.nodes.is_empty() {
        warnings.push(Issue::warning("nodes", "Workflow has no nodes"));
    }
    warnings
}
