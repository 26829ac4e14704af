//! Palette drops through FlowEditor::dispatch.

use chatflow::{catalog, CanvasOrigin, DragPayload, DropEvent, EditorCommand, Position};

use crate::common::{memory_store, seeded_editor};

/// **Scenario**: Drop at viewport (250, 150) over a canvas at (50, 50) creates a node at (200, 100).
#[test]
fn drop_creates_node_at_canvas_position() {
    let mut editor = seeded_editor(memory_store());
    let payload = catalog()[0].on_drag_start();

    editor
        .dispatch(EditorCommand::Drop {
            event: DropEvent::new(payload, 250.0, 150.0),
            origin: CanvasOrigin::new(50.0, 50.0),
        })
        .unwrap();

    let node = editor.graph().node("1000").expect("dropped node");
    assert_eq!(node.position, Position::new(200.0, 100.0));
    assert_eq!(node.data.label, "Send Message");
    assert_eq!(node.data.message, "New message");
}

/// **Scenario**: Two drops in the same millisecond still get distinct ids.
#[test]
fn consecutive_drops_get_distinct_ids() {
    let mut editor = seeded_editor(memory_store());
    for _ in 0..2 {
        editor
            .dispatch(EditorCommand::Drop {
                event: DropEvent::new(DragPayload::new("messageNode"), 0.0, 0.0),
                origin: CanvasOrigin::default(),
            })
            .unwrap();
    }
    assert!(editor.graph().contains_node("1000"));
    assert!(editor.graph().contains_node("1001"));
}

/// **Scenario**: A drop without a template identifier is ignored.
#[test]
fn drop_without_template_is_ignored() {
    let mut editor = seeded_editor(memory_store());
    editor
        .dispatch(EditorCommand::Drop {
            event: DropEvent::new(DragPayload::new(""), 10.0, 10.0),
            origin: CanvasOrigin::default(),
        })
        .unwrap();
    assert_eq!(editor.graph().len(), 2);
    assert!(editor.drain_notices().is_empty());
}
