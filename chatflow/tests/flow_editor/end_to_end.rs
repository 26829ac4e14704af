//! The full editing loop on the seeded flow.

use chatflow::{Connection, EditorCommand, FlowEditor, Panel, PersistenceGateway};

use crate::common::{memory_store, seeded_editor};

/// **Scenario**: Edit node 2, get refused on a second outgoing edge, save, reload.
///
/// Given: the seeded flow (1 → 2) over an empty store  
/// When: node 2's message becomes "hello", 1→2 is attempted again, the flow is saved and
/// a fresh editor mounts the same store  
/// Then: the reload shows node 2 with "hello", node 1 unchanged, edge e1-2 intact
#[test]
fn edit_save_reload() {
    let store = memory_store();
    let mut editor = seeded_editor(store.clone());
    editor.mount().unwrap();

    editor.dispatch(EditorCommand::SelectNode("2".into())).unwrap();
    assert_eq!(editor.panel(), Panel::Settings);
    assert_eq!(editor.settings().map(|s| s.message()), Some("test message 2"));
    editor.dispatch(EditorCommand::EditMessage("hello".into())).unwrap();
    editor.dispatch(EditorCommand::CommitSettings).unwrap();
    assert_eq!(editor.panel(), Panel::Nodes);

    assert!(editor
        .dispatch(EditorCommand::Connect(Connection::new("1", "2")))
        .is_err());
    editor.dispatch(EditorCommand::Save).unwrap();

    let titles: Vec<String> = editor.drain_notices().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec![
            "Connection not allowed".to_string(),
            "Flow saved successfully".to_string()
        ]
    );

    let mut reloaded = FlowEditor::new(PersistenceGateway::with_default_key(store));
    reloaded.mount().unwrap();
    let graph = reloaded.graph();
    assert_eq!(graph.node("2").map(|n| n.data.message.as_str()), Some("hello"));
    assert_eq!(graph.node("1").map(|n| n.data.message.as_str()), Some("test message 1"));
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].id, "e1-2");
}

/// **Scenario**: Cancelling the settings editor leaves the node as it was.
#[test]
fn cancel_discards_pending_edits() {
    let mut editor = seeded_editor(memory_store());
    editor.dispatch(EditorCommand::SelectNode("1".into())).unwrap();
    editor.dispatch(EditorCommand::EditLabel("Greeting".into())).unwrap();
    editor.dispatch(EditorCommand::PaneClick).unwrap();

    assert_eq!(editor.selection(), None);
    assert_eq!(
        editor.graph().node("1").map(|n| n.data.label.as_str()),
        Some("Send Message")
    );
}

/// **Scenario**: Listeners see every change the editor makes, in order.
#[test]
fn listeners_observe_changes() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut editor = seeded_editor(memory_store());
    let id = editor.subscribe(move |event| sink.borrow_mut().push(format!("{:?}", event)));

    editor.dispatch(EditorCommand::RemoveEdge("e1-2".into())).unwrap();
    editor.dispatch(EditorCommand::Connect(Connection::new("2", "1"))).unwrap();
    assert!(editor.unsubscribe(id));
    editor.dispatch(EditorCommand::RemoveNode("1".into())).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].starts_with("EdgeRemoved"));
    assert!(seen[1].starts_with("EdgeAdded"));
}
