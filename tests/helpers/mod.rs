//! Builders for workflow documents used across the integration tests.

use serde_json::{Value, json};

/// Minimal well-formed node with non-empty parameters.
pub fn node(id: &str, name: &str, node_type: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": node_type,
        "typeVersion": 1,
        "position": [0, 0],
        "parameters": { "value": 1 }
    })
}

/// A document with the given nodes and connections.
pub fn workflow(nodes: Vec<Value>, connections: Value) -> Value {
    json!({ "nodes": nodes, "connections": connections })
}

/// One connection entry targeting `target` on input slot 0.
pub fn conn(target: &str) -> Value {
    json!({ "node": target, "type": "main", "index": 0 })
}
