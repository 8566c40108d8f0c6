//! Integration tests for connection-level consistency rules: endpoint
//! existence, slot indices, and disconnected-node warnings.

use flowlint::validate;
use serde_json::json;

mod helpers;
use helpers::{conn, node, workflow};

#[test]
fn unknown_source_suppresses_deeper_checks() {
    // The entries under Ghost have a missing target and a negative index,
    // but an unknown source yields exactly one error for the whole block.
    let doc = workflow(
        vec![node("n1", "Start", "n8n-nodes-base.manualTrigger")],
        json!({
            "Ghost": {
                "main": [[
                    conn("AlsoMissing"),
                    { "node": "Start", "type": "main", "index": -1 }
                ]]
            }
        }),
    );
    let report = validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
    assert_eq!(report.errors[0].path, "connections.Ghost");
    assert_eq!(report.errors[0].message, "Source node 'Ghost' does not exist");
}

#[test]
fn unknown_target_is_reported_at_its_slot_path() {
    let doc = workflow(
        vec![node("n1", "Start", "n8n-nodes-base.manualTrigger")],
        json!({ "Start": { "main": [[conn("NonExistent")]] } }),
    );
    let report = validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
    assert_eq!(report.errors[0].path, "connections.Start.main[0][0]");
    assert_eq!(
        report.errors[0].message,
        "Target node 'NonExistent' does not exist"
    );
}

#[test]
fn slot_and_entry_indices_appear_in_the_path() {
    let doc = workflow(
        vec![
            node("n1", "Start", "n8n-nodes-base.manualTrigger"),
            node("n2", "Stop", "n8n-nodes-base.noOp"),
        ],
        json!({
            "Start": {
                "main": [
                    [conn("Stop")],
                    [conn("Stop"), conn("Missing")]
                ]
            }
        }),
    );
    let report = validate(&doc);
    assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
    assert_eq!(report.errors[0].path, "connections.Start.main[1][1]");
}

#[test]
fn negative_index_is_an_error() {
    let doc = workflow(
        vec![
            node("n1", "Start", "n8n-nodes-base.manualTrigger"),
            node("n2", "Stop", "n8n-nodes-base.noOp"),
        ],
        json!({
            "Start": { "main": [[{ "node": "Stop", "type": "main", "index": -1 }]] }
        }),
    );
    let report = validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "got: {:?}", report.errors);
    assert_eq!(report.errors[0].path, "connections.Start.main[0][0].index");
    assert_eq!(report.errors[0].message, "Invalid connection index: -1");
}

#[test]
fn bad_target_and_negative_index_both_report() {
    let doc = workflow(
        vec![node("n1", "Start", "n8n-nodes-base.manualTrigger")],
        json!({
            "Start": { "main": [[{ "node": "Missing", "type": "main", "index": -2 }]] }
        }),
    );
    let report = validate(&doc);
    assert_eq!(report.errors.len(), 2, "got: {:?}", report.errors);
    assert_eq!(report.errors[0].path, "connections.Start.main[0][0]");
    assert_eq!(report.errors[1].path, "connections.Start.main[0][0].index");
}

#[test]
fn null_slots_are_unconnected_ports_not_errors() {
    let doc = workflow(
        vec![
            node("n1", "Start", "n8n-nodes-base.manualTrigger"),
            node("n2", "Stop", "n8n-nodes-base.noOp"),
        ],
        json!({ "Start": { "main": [null, [conn("Stop")]] } }),
    );
    let report = validate(&doc);
    assert!(report.valid, "got: {:?}", report.errors);
}

#[test]
fn disconnected_node_warns() {
    let doc = workflow(
        vec![
            node("n1", "Start", "n8n-nodes-base.manualTrigger"),
            node("n2", "Stop", "n8n-nodes-base.noOp"),
            node("n3", "Orphan", "n8n-nodes-base.set"),
        ],
        json!({ "Start": { "main": [[conn("Stop")]] } }),
    );
    let report = validate(&doc);
    assert!(report.valid);
    assert_eq!(report.warnings.len(), 1, "got: {:?}", report.warnings);
    assert_eq!(report.warnings[0].path, "nodes.Orphan");
    assert_eq!(
        report.warnings[0].message,
        "Node is not connected to any other node"
    );
}

#[test]
fn target_only_nodes_count_as_connected() {
    let doc = workflow(
        vec![
            node("n1", "Start", "n8n-nodes-base.manualTrigger"),
            node("n2", "Stop", "n8n-nodes-base.noOp"),
        ],
        json!({ "Start": { "main": [[conn("Stop")]] } }),
    );
    let report = validate(&doc);
    assert!(report.warnings.is_empty(), "got: {:?}", report.warnings);
}

#[test]
fn trigger_like_types_are_exempt_from_disconnection_warnings() {
    // Substring match on the type, case-insensitive.
    let doc = workflow(
        vec![
            node("n1", "Hook", "custom.WebHookListener"),
            node("n2", "Timer", "n8n-nodes-base.scheduleTrigger"),
            node("n3", "Nightly", "acme.CronJob"),
        ],
        json!({}),
    );
    let report = validate(&doc);
    assert!(report.warnings.is_empty(), "got: {:?}", report.warnings);
}

#[test]
fn sticky_note_exemption_is_an_exact_type_match() {
    let doc = workflow(
        vec![
            node("n1", "Note", "n8n-nodes-base.stickyNote"),
            node("n2", "AlmostNote", "n8n-nodes-base.stickynote"),
        ],
        json!({}),
    );
    let report = validate(&doc);
    // The casing variant is not the annotation type, so it still warns.
    assert_eq!(report.warnings.len(), 1, "got: {:?}", report.warnings);
    assert_eq!(report.warnings[0].path, "nodes.AlmostNote");
}
