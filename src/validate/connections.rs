//! Connection-level consistency rules.

use std::collections::HashSet;

use crate::parse::{Connections, Node};
use crate::report::Issue;

/// Errors pass: every connection endpoint must name an existing node, and
/// connection indices must be non-negative.
pub fn connection_errors(nodes: &[Node], connections: &Connections) -> Vec<Issue> {
    let node_names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    let mut errors = Vec::new();

    for (source, node_connections) in connections {
        if !node_names.contains(source.as_str()) {
            errors.push(Issue::error(
                format!("connections.{}", source),
                format!("Source node '{}' does not exist", source),
            ));
            // Target checks under an unknown source would only cascade noise.
            continue;
        }

        for (connection_type, slots) in node_connections {
            for (output_index, slot) in slots.iter().enumerate() {
                // A null slot is an unconnected output port, not an error.
                let Some(entries) = slot else { continue };

                for (entry_index, connection) in entries.iter().enumerate() {
                    let path = format!(
                        "connections.{}.{}[{}][{}]",
                        source, connection_type, output_index, entry_index
                    );

                    if !node_names.contains(connection.node.as_str()) {
                        errors.push(Issue::error(
                            path.clone(),
                            format!("Target node '{}' does not exist", connection.node),
                        ));
                    }
                    if connection.index < 0.0 {
                        errors.push(Issue::error(
                            format!("{}.index", path),
                            format!("Invalid connection index: {}", connection.index),
                        ));
                    }
                }
            }
        }
    }

    errors
}

/// Warnings pass: nodes whose name appears nowhere in the connection graph.
///
/// The connected set is the union of all source keys and all target names,
/// taken from the raw map; trigger-style nodes and sticky notes are exempt.
pub fn connection_warnings(nodes: &[Node], connections: &Connections) -> Vec<Issue> {
    let mut connected: HashSet<&str> = HashSet::new();
    for (source, node_connections) in connections {
        connected.insert(source.as_str());
        for slots in node_connections.values() {
            for entries in slots.iter().flatten() {
                for connection in entries {
                    connected.insert(connection.node.as_str());
                }
            }
        }
    }

    let mut warnings = Vec::new();
    for node in nodes {
        if connected.contains(node.name.as_str()) {
            continue;
        }
        if node.is_trigger_like() || node.is_sticky_note() {
            continue;
        }
        warnings.push(Issue::warning(
            format!("nodes.{}", node.name),
            "Node is not connected to any other node",
        ));
    }

    warnings
}
