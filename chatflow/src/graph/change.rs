//! Incremental changes and change notifications.
//!
//! [`NodeChange`] / [`EdgeChange`] are what a rendering layer reports for direct
//! manipulation (dragging a node, deleting a multi-selection). [`GraphEvent`] is what
//! the graph reports back to its listeners after every mutation.

use super::node::Position;

/// Direct-manipulation change to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    /// Node dragged to a new canvas position.
    Position { id: String, position: Position },
    /// Node deleted from the canvas; connected edges go with it.
    Remove { id: String },
}

/// Direct-manipulation change to an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeChange {
    Remove { id: String },
}

/// Notification emitted after a graph mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    NodeAdded { id: String },
    NodeUpdated { id: String },
    NodeMoved { id: String, position: Position },
    NodeRemoved { id: String },
    EdgeAdded { id: String },
    EdgeRemoved { id: String },
    /// Whole graph swapped (load).
    Replaced { nodes: usize, edges: usize },
}

/// Handle returned by `FlowGraph::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);
