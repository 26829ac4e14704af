//! Turning a palette drop into a node at canvas-local coordinates.

use crate::graph::{Node, NodeData, Position, DEFAULT_LABEL, DEFAULT_MESSAGE};

use super::id::NodeIdGenerator;
use super::template::DragPayload;

/// On-screen origin (top-left) of the canvas container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasOrigin {
    pub left: f64,
    pub top: f64,
}

impl CanvasOrigin {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// A drop on the canvas: the drag payload and the pointer's viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub payload: DragPayload,
    pub client_x: f64,
    pub client_y: f64,
}

impl DropEvent {
    pub fn new(payload: DragPayload, client_x: f64, client_y: f64) -> Self {
        Self {
            payload,
            client_x,
            client_y,
        }
    }

    /// Viewport coordinates minus the container origin.
    pub fn canvas_position(&self, origin: CanvasOrigin) -> Position {
        Position::new(self.client_x - origin.left, self.client_y - origin.top)
    }
}

/// Builds the node a drop creates, with default data and a fresh id.
///
/// Returns `None` when the payload is empty or names no known template.
pub fn instantiate(
    event: &DropEvent,
    origin: CanvasOrigin,
    ids: &mut dyn NodeIdGenerator,
) -> Option<Node> {
    let kind = event.payload.kind()?;
    Some(Node {
        id: ids.next_id(),
        kind,
        position: event.canvas_position(origin),
        data: NodeData::new(DEFAULT_LABEL, DEFAULT_MESSAGE),
    })
}
