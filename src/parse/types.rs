//! Typed model for workflow documents.
//!
//! These types are the serde target for workflow JSON that the structural
//! stage has already accepted. The consistency checkers operate on this
//! model, never on raw values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Substrings identifying trigger-style node types, matched
/// case-insensitively against the node `type`.
pub const TRIGGER_TYPE_HINTS: &[&str] = &["trigger", "webhook", "schedule", "cron", "start"];

/// Annotation node type that is expected to exist unconnected. Matched
/// exactly, unlike the trigger hints.
pub const STICKY_NOTE_TYPE: &str = "n8n-nodes-base.stickyNote";

/// Ordered output slots of one connection type; a `None` slot is an output
/// port with no connections.
pub type OutputSlots = Vec<Option<Vec<Connection>>>;

/// Connection-type label -> ordered output slots.
pub type NodeConnections = BTreeMap<String, OutputSlots>;

/// Source node name -> that node's outgoing connections. Keyed maps are
/// `BTreeMap` so diagnostics iterate in a stable order.
pub type Connections = BTreeMap<String, NodeConnections>;

/// The root aggregate. Root metadata the validator does not interpret
/// (id, name, active, settings, pinData, ...) is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    pub connections: Connections,
    #[serde(flatten)]
    pub meta: serde_json::Map<String, Value>,
}

/// A directed edge endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub node: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub index: f64,
}

/// A single workflow vertex.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: f64,
    pub position: [f64; 2],
    pub parameters: serde_json::Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_in_flow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_on_fail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tries: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_between_tries: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_output_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execute_once: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<OnErrorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_on_fail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BTreeMap<String, CredentialRef>>,
}

/// Node behavior when execution fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnErrorMode {
    #[serde(rename = "continueErrorOutput")]
    ContinueErrorOutput,
    #[serde(rename = "continueRegularOutput")]
    ContinueRegularOutput,
    #[serde(rename = "stopWorkflow")]
    StopWorkflow,
}

/// Reference to a stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Node {
    /// Trigger-style nodes are expected to have no incoming connections.
    pub fn is_trigger_like(&self) -> bool {
        let node_type = self.node_type.to_lowercase();
        TRIGGER_TYPE_HINTS.iter().any(|hint| node_type.contains(hint))
    }

    /// Sticky notes are annotations and never participate in the graph.
    pub fn is_sticky_note(&self) -> bool {
        self.node_type == STICKY_NOTE_TYPE
    }
}
