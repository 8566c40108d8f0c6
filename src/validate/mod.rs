//! Validation pipeline: structural stage, then node and connection rules.
//!
//! Each stage keeps errors and warnings in separate lists; the merged
//! report preserves stage order (structural, node, connection) within each
//! list.

pub mod connections;
pub mod nodes;
pub mod structural;

use std::path::Path;

use serde_json::Value;

use crate::error::InputError;
use crate::parse;
use crate::report::ValidationReport;

/// Validate an already-parsed workflow document.
///
/// A structural failure short-circuits: node and connection rules
/// presuppose a conforming shape and never see an invalid one.
pub fn validate(doc: &Value) -> ValidationReport {
    let workflow = match structural::check_structure(doc) {
        Ok(workflow) => workflow,
        Err(errors) => return ValidationReport::new(errors, Vec::new()),
    };

    let mut warnings = structural::structural_warnings(&workflow);

    let mut errors = nodes::node_errors(&workflow.nodes);
    warnings.extend(nodes::node_warnings(&workflow.nodes));

    errors.extend(connections::connection_errors(
        &workflow.nodes,
        &workflow.connections,
    ));
    warnings.extend(connections::connection_warnings(
        &workflow.nodes,
        &workflow.connections,
    ));

    ValidationReport::new(errors, warnings)
}

/// Validate a workflow document given as raw JSON text.
pub fn validate_json(text: &str) -> ValidationReport {
    match parse::parse_json(text) {
        Ok(doc) => validate(&doc),
        Err(err) => input_error_report(&err),
    }
}

/// Validate a workflow document read from a file.
pub fn validate_file(path: &Path) -> ValidationReport {
    match parse::read_document(path) {
        Ok(doc) => validate(&doc),
        Err(err) => input_error_report(&err),
    }
}

fn input_error_report(err: &InputError) -> ValidationReport {
    ValidationReport::from_error(err.path(), err.to_string())
}
