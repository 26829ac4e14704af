//! Save validation, storage round trips and load failures through FlowEditor.

use std::sync::Arc;

use chatflow::{
    EditorCommand, FileStore, FlowEditor, FlowError, FlowGraph, KeyValueStore, NodeChange,
    PersistenceGateway, Position, SaveStage, DEFAULT_STORAGE_KEY,
};

use crate::common::{graph_with, memory_store, seeded_editor, sorted_edge_ids};

/// **Scenario**: A, B, C with only A→C has two roots; save is refused and the store untouched.
///
/// Given: a store already holding an older flow  
/// When: Save is dispatched for A, B, C with edge A→C  
/// Then: a validation error, one "Cannot save Flow" notice, stored bytes unchanged
#[test]
fn save_with_two_roots_is_refused() {
    let store = memory_store();
    store.put(DEFAULT_STORAGE_KEY, "{\"nodes\":[],\"edges\":[]}").unwrap();
    let mut editor = FlowEditor::new(PersistenceGateway::with_default_key(store.clone()))
        .with_graph(graph_with(&["A", "B", "C"], &[("A", "C")]));

    let err = editor.dispatch(EditorCommand::Save).unwrap_err();

    assert!(matches!(err, FlowError::Validation(_)));
    assert_eq!(editor.save_stage(), SaveStage::Aborted);
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("{\"nodes\":[],\"edges\":[]}")
    );
    let notices = editor.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Cannot save Flow");
    assert!(notices[0].is_destructive());
}

/// **Scenario**: A node dragged to a NaN position cannot be saved; the stored flow still mounts.
///
/// Given: the seed flow saved once  
/// When: node 1 moves to (NaN, 0) and Save is dispatched  
/// Then: a "Cannot save Flow" notice, stage Failed, and a fresh editor loads the earlier record
#[test]
fn non_finite_position_is_not_saved() {
    let store = memory_store();
    let mut editor = seeded_editor(store.clone());
    editor.dispatch(EditorCommand::Save).unwrap();
    editor.drain_notices();
    let before = store.get(DEFAULT_STORAGE_KEY).unwrap();

    editor
        .dispatch(EditorCommand::ApplyNodeChanges(vec![NodeChange::Position {
            id: "1".into(),
            position: Position::new(f64::NAN, 0.0),
        }]))
        .unwrap();
    let err = editor.dispatch(EditorCommand::Save).unwrap_err();

    assert!(matches!(err, FlowError::Persistence(_)));
    assert_eq!(editor.save_stage(), SaveStage::Failed);
    let notices = editor.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Cannot save Flow");
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), before);

    let mut fresh = FlowEditor::new(PersistenceGateway::with_default_key(store));
    fresh.mount().unwrap();
    assert_eq!(fresh.graph().node("1").unwrap().position, Position::new(100.0, 100.0));
}

/// **Scenario**: Empty and single-node graphs always save.
#[test]
fn trivial_graphs_save() {
    for ids in [&[][..], &["only"][..]] {
        let mut editor = FlowEditor::new(PersistenceGateway::with_default_key(memory_store()))
            .with_graph(graph_with(ids, &[]));
        editor.dispatch(EditorCommand::Save).unwrap();
        assert_eq!(editor.save_stage(), SaveStage::Succeeded);
    }
}

/// **Scenario**: Saving to a file store and mounting a fresh editor restores the same graph.
#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));

    let mut first = seeded_editor(store.clone());
    first.dispatch(EditorCommand::Save).unwrap();
    assert!(dir.path().join("flow-editor-data.json").exists());

    let mut second = FlowEditor::new(PersistenceGateway::with_default_key(store));
    second.mount().unwrap();

    assert_eq!(second.graph().nodes(), first.graph().nodes());
    assert_eq!(
        sorted_edge_ids(second.graph().edges()),
        sorted_edge_ids(first.graph().edges())
    );
    let titles: Vec<String> = second.drain_notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Flow loaded successfully".to_string()]);
}

/// **Scenario**: Mounting with nothing stored keeps the starting graph and says nothing.
#[test]
fn mount_without_stored_flow_keeps_graph() {
    let mut editor = seeded_editor(memory_store());
    editor.mount().unwrap();
    assert_eq!(editor.graph().nodes(), FlowGraph::seeded().nodes());
    assert_eq!(editor.graph().edges(), FlowGraph::seeded().edges());
    assert!(editor.drain_notices().is_empty());
}

/// **Scenario**: An unparseable record fails the load and leaves the current graph in place.
#[test]
fn corrupt_record_leaves_graph_untouched() {
    let store = memory_store();
    store.put(DEFAULT_STORAGE_KEY, "{ nodes: oops").unwrap();
    let mut editor = seeded_editor(store);

    let err = editor.dispatch(EditorCommand::Load).unwrap_err();

    assert!(matches!(err, FlowError::Persistence(_)));
    assert_eq!(editor.graph().len(), 2);
    let notices = editor.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Cannot load Flow");
}

/// **Scenario**: A record missing `edges` loads as a graph with no edges.
#[test]
fn record_missing_edges_loads_with_none() {
    let store = memory_store();
    store
        .put(
            DEFAULT_STORAGE_KEY,
            r#"{"nodes":[{"id":"9","type":"messageNode","position":{"x":1.0,"y":2.0},"data":{"label":"L","message":"M"}}]}"#,
        )
        .unwrap();
    let mut editor = seeded_editor(store);
    editor.mount().unwrap();
    assert_eq!(editor.graph().len(), 1);
    assert!(editor.graph().edges().is_empty());
    assert_eq!(editor.graph().node("9").map(|n| n.data.message.as_str()), Some("M"));
}
