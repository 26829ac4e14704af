use crate::graph::{Connection, EdgeChange, Node, NodeChange, NodeDataPatch};
use crate::palette::{CanvasOrigin, DropEvent};

/// One user action, processed synchronously by `FlowEditor::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Insert a ready-made node.
    AddNode(Node),
    /// Palette template dropped on the canvas whose container sits at `origin`.
    Drop { event: DropEvent, origin: CanvasOrigin },
    /// Connect two nodes, subject to the connection policy.
    Connect(Connection),
    UpdateNodeData { id: String, patch: NodeDataPatch },
    RemoveNode(String),
    RemoveEdge(String),
    ApplyNodeChanges(Vec<NodeChange>),
    ApplyEdgeChanges(Vec<EdgeChange>),
    /// Node clicked: select it and open the settings editor.
    SelectNode(String),
    /// Empty canvas clicked: deselect and close the settings editor.
    PaneClick,
    EditLabel(String),
    EditMessage(String),
    CommitSettings,
    CancelSettings,
    DeleteSelected,
    Save,
    Load,
}
