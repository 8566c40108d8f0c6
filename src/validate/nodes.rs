//! Node-level consistency rules.

use std::collections::HashSet;

use crate::parse::Node;
use crate::report::Issue;

/// Coordinate bound for node positions on either axis.
const POSITION_LIMIT: f64 = 100_000.0;

fn node_path(index: usize, node: &Node) -> String {
    format!("nodes[{}].{}", index, node.name)
}

/// Errors pass: identity uniqueness and range rules, in declaration order.
/// Only the second and later occurrences of a duplicate are flagged.
pub fn node_errors(nodes: &[Node]) -> Vec<Issue> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for (index, node) in nodes.iter().enumerate() {
        let path = node_path(index, node);

        if !seen_ids.insert(node.id.as_str()) {
            errors.push(Issue::error(
                format!("{}.id", path),
                format!("Duplicate node ID: {}", node.id),
            ));
        }
        if !seen_names.insert(node.name.as_str()) {
            errors.push(Issue::error(
                format!("{}.name", path),
                format!("Duplicate node name: {}", node.name),
            ));
        }

        let [x, y] = node.position;
        if x.abs() > POSITION_LIMIT || y.abs() > POSITION_LIMIT {
            errors.push(Issue::error(
                format!("{}.position", path),
                format!("Node position out of bounds: [{}, {}]", x, y),
            ));
        }

        if node.type_version < 1.0 {
            errors.push(Issue::error(
                format!("{}.typeVersion", path),
                format!("Invalid typeVersion: {} (must be >= 1)", node.type_version),
            ));
        }
    }

    errors
}

/// Warnings pass: advisory findings, computed independently of the errors
/// pass and never merged with it.
pub fn node_warnings(nodes: &[Node]) -> Vec<Issue> {
    let mut warnings = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        let path = node_path(index, node);

        if node.disabled == Some(true) {
            warnings.push(Issue::warning(path.clone(), "Node is disabled"));
        }
        if node.parameters.is_empty() {
            warnings.push(Issue::warning(path, "Node has no parameters configured"));
        }
    }

    warnings
}
