//! One-shot commands: mount, apply, save.

use std::sync::Arc;

use chatflow::{
    CanvasOrigin, Edge, FlowEditor, FlowGraph, InMemoryStore, Node, NodeData,
    PersistenceGateway, Position,
};

use super::{file_config, record_path, run_action, stored};
use crate::run::{execute, Action, CommandError, Console};

fn show() -> Action {
    Action::Show { json: false }
}

/// **Scenario**: show on an empty store prints the seed flow and saves nothing.
///
/// Given: an empty store directory  
/// When: `show` runs  
/// Then: both seed nodes and edge e1-2 are listed, no notices, no record written
#[test]
fn show_prints_seed_flow_without_saving() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(&file_config(dir.path()), show());

    assert!(ran.result.is_ok());
    assert!(ran.out.contains("nodes: 2"), "{}", ran.out);
    assert!(ran.out.contains("1  (100, 100)  Send Message: test message 1"), "{}", ran.out);
    assert!(ran.out.contains("e1-2  1 -> 2"), "{}", ran.out);
    assert!(ran.notices.is_empty(), "{}", ran.notices);
    assert!(!record_path(dir.path()).exists());
}

#[test]
fn show_json_lists_nodes_and_edges() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(&file_config(dir.path()), Action::Show { json: true });

    let v: serde_json::Value = serde_json::from_str(&ran.out).unwrap();
    assert_eq!(v["nodes"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["nodes"][0]["type"], "messageNode");
    assert_eq!(v["edges"][0]["id"], "e1-2");
}

/// **Scenario**: edit saves, and the next run loads the edit.
///
/// Given: an empty store  
/// When: `edit 2 --message hello` runs, then `show` runs  
/// Then: the record holds "hello" for node 2, and the second run reports the restored flow
#[test]
fn edit_saves_and_next_run_loads_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    let ran = run_action(
        &config,
        Action::Edit {
            id: "2".into(),
            label: None,
            message: Some("hello".into()),
        },
    );
    assert!(ran.result.is_ok(), "{:?}", ran.result.err().map(|e| e.to_string()));
    assert!(ran.notices.contains("Flow saved successfully"));
    let v = stored(dir.path());
    assert_eq!(v["nodes"][1]["data"]["message"], "hello");
    assert_eq!(v["nodes"][1]["data"]["label"], "Send Message");

    let ran = run_action(&config, show());
    assert!(ran.out.contains("2  (400, 200)  Send Message: hello"), "{}", ran.out);
    assert!(ran.notices.contains("Flow loaded successfully"));
}

/// **Scenario**: add --after appends a node to the chain in one valid save.
#[test]
fn add_after_appends_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(
        &file_config(dir.path()),
        Action::Add {
            x: 650.0,
            y: 250.0,
            origin: CanvasOrigin::new(50.0, 50.0),
            template: "messageNode".into(),
            after: Some("2".into()),
        },
    );

    assert!(ran.result.is_ok(), "{}", ran.notices);
    assert!(ran.out.starts_with("added node "), "{}", ran.out);
    let v = stored(dir.path());
    let nodes = v["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[2]["position"]["x"], 600.0);
    assert_eq!(nodes[2]["data"]["message"], "New message");
    assert_eq!(v["edges"].as_array().map(Vec::len), Some(2));
}

/// **Scenario**: add without a connection leaves two roots; the save is refused.
///
/// Given: an empty store (seed flow)  
/// When: `add 10 10` runs  
/// Then: the run fails with the validation notice and no record is written
#[test]
fn add_without_connection_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(
        &file_config(dir.path()),
        Action::Add {
            x: 10.0,
            y: 10.0,
            origin: CanvasOrigin::default(),
            template: "messageNode".into(),
            after: None,
        },
    );

    assert!(ran.result.is_err());
    assert!(ran.notices.contains(
        "error: Cannot save Flow: More than one node has empty target handles."
    ), "{}", ran.notices);
    assert!(!record_path(dir.path()).exists());
}

#[test]
fn add_with_unknown_template_fails_before_editing() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(
        &file_config(dir.path()),
        Action::Add {
            x: 0.0,
            y: 0.0,
            origin: CanvasOrigin::default(),
            template: "imageNode".into(),
            after: None,
        },
    );
    let err = ran.result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<CommandError>(),
        Some(&CommandError::UnknownTemplate("imageNode".into()))
    );
}

/// **Scenario**: A second outgoing connection is refused with the policy notice.
#[test]
fn connect_from_connected_source_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(
        &file_config(dir.path()),
        Action::Connect {
            source: "1".into(),
            target: "2".into(),
        },
    );
    assert!(ran.result.is_err());
    assert!(ran.notices.contains("error: Connection not allowed"), "{}", ran.notices);
    assert!(!record_path(dir.path()).exists());
}

/// **Scenario**: Deleting node 2 saves a one-node flow and reports the deletion.
#[test]
fn delete_removes_node_and_its_edges() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(&file_config(dir.path()), Action::Delete { id: "2".into() });

    assert!(ran.result.is_ok());
    assert!(ran.notices.contains("Node deleted: The selected node has been removed from the flow."));
    let v = stored(dir.path());
    assert_eq!(v["nodes"].as_array().map(Vec::len), Some(1));
    assert_eq!(v["edges"].as_array().map(Vec::len), Some(0));
}

#[test]
fn move_updates_position() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(
        &file_config(dir.path()),
        Action::Move {
            id: "1".into(),
            x: 5.0,
            y: -6.0,
        },
    );
    assert!(ran.result.is_ok());
    let v = stored(dir.path());
    assert_eq!(v["nodes"][0]["position"]["x"], 5.0);
    assert_eq!(v["nodes"][0]["position"]["y"], -6.0);
}

/// **Scenario**: Commands naming missing nodes or edges fail without saving.
#[test]
fn unknown_ids_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    let cases = [
        (
            Action::Delete { id: "9".into() },
            CommandError::UnknownNode("9".into()),
        ),
        (
            Action::Disconnect {
                edge_id: "e9-9".into(),
            },
            CommandError::UnknownEdge("e9-9".into()),
        ),
        (
            Action::Edit {
                id: "1".into(),
                label: None,
                message: None,
            },
            CommandError::NothingToEdit,
        ),
    ];
    for (action, expected) in cases {
        let err = run_action(&config, action).result.unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(&expected));
    }
    assert!(!record_path(dir.path()).exists());
}

#[test]
fn validate_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let ran = run_action(&file_config(dir.path()), Action::Validate);
    assert!(ran.result.is_ok());
    assert_eq!(ran.out.trim(), "ok: 2 nodes, 1 edges can be saved");
    assert!(!record_path(dir.path()).exists());

    let empty = file_config(dir.path()).without_seed();
    assert!(run_action(&empty, Action::Validate).result.is_ok());
}

/// **Scenario**: An unreadable record stops the run before anything is overwritten.
///
/// Given: a record that is not valid JSON  
/// When: a mutating command runs  
/// Then: the load notice is printed, the run fails, the record is unchanged
#[test]
fn corrupt_record_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(record_path(dir.path()), "{ broken").unwrap();

    let ran = run_action(
        &file_config(dir.path()),
        Action::Move {
            id: "1".into(),
            x: 0.0,
            y: 0.0,
        },
    );

    assert!(ran.result.is_err());
    assert!(ran.notices.contains("error: Cannot load Flow"), "{}", ran.notices);
    assert_eq!(std::fs::read_to_string(record_path(dir.path())).unwrap(), "{ broken");
}

/// **Scenario**: A custom storage key writes its own record.
#[test]
fn storage_key_selects_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = file_config(dir.path());
    config.storage_key = "support-bot".into();

    let ran = run_action(&config, Action::Delete { id: "1".into() });
    assert!(ran.result.is_ok());
    assert!(dir.path().join("support-bot.json").exists());
    assert!(!record_path(dir.path()).exists());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_store_round_trips() {
    use crate::config::StoreKind;

    let dir = tempfile::tempdir().unwrap();
    let mut config = file_config(dir.path());
    config.store = StoreKind::Sqlite;

    let ran = run_action(
        &config,
        Action::Edit {
            id: "1".into(),
            label: Some("Greeting".into()),
            message: None,
        },
    );
    assert!(ran.result.is_ok(), "{}", ran.notices);
    assert!(config.sqlite_path().exists());

    let ran = run_action(&config, Action::Show { json: false });
    assert!(ran.out.contains("Greeting: test message 1"), "{}", ran.out);
}

/// **Scenario**: A connection whose derived id is already taken is reported, not printed.
///
/// Given: nodes 1, 2-3, 1-2, 3 with edge 1 -> 2-3 (id e1-2-3)  
/// When: connect 1-2 3 runs (which also derives e1-2-3)  
/// Then: EdgeExists("e1-2-3"), nothing printed to out, still one edge
#[test]
fn connect_with_colliding_edge_id_is_reported() {
    let mut graph = FlowGraph::new();
    for id in ["1", "2-3", "1-2", "3"] {
        graph.add_node(Node::message(id, Position::default(), NodeData::default()));
    }
    graph.add_edge(Edge::new("1", "2-3").styled()).unwrap();
    let gateway = PersistenceGateway::with_default_key(Arc::new(InMemoryStore::new()));
    let mut editor = FlowEditor::new(gateway).with_graph(graph);

    let (mut out, mut notices) = (Vec::new(), Vec::new());
    let result = {
        let mut console = Console::new(&mut out, &mut notices);
        execute(
            &mut editor,
            Action::Connect {
                source: "1-2".into(),
                target: "3".into(),
            },
            &mut console,
        )
    };

    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<CommandError>(),
        Some(&CommandError::EdgeExists("e1-2-3".into()))
    );
    assert!(out.is_empty());
    assert_eq!(editor.graph().edges().len(), 1);
    assert_eq!(editor.graph().edges()[0].source, "1");
}

/// **Scenario**: A non-finite position never reaches storage, so later runs still mount.
///
/// Given: an empty store  
/// When: node 1 is moved to (NaN, 0), then a second run shows the flow  
/// Then: the first run fails with the save-error notice and writes nothing; the second succeeds
#[test]
fn non_finite_move_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());

    let ran = run_action(
        &config,
        Action::Move {
            id: "1".into(),
            x: f64::NAN,
            y: 0.0,
        },
    );
    assert!(ran.result.is_err());
    assert!(
        ran.notices
            .contains("error: Cannot save Flow: There was an error saving your flow."),
        "{}",
        ran.notices
    );
    assert!(!record_path(dir.path()).exists());

    let ran = run_action(&config, show());
    assert!(ran.result.is_ok());
    assert!(ran.out.contains("1  (100, 100)"), "{}", ran.out);
}
