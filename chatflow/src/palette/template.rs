//! Node templates offered by the palette and the drag payload they attach.

use crate::graph::{IconKind, NodeKind};

/// Key under which the template type travels in the platform drag data.
pub const DRAG_DATA_FORMAT: &str = "application/reactflow";

/// A draggable palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTemplate {
    pub kind: NodeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl NodeTemplate {
    pub fn icon(&self) -> IconKind {
        self.kind.icon()
    }

    /// Payload attached on drag start.
    pub fn on_drag_start(&self) -> DragPayload {
        DragPayload::new(self.kind.type_id())
    }
}

/// The fixed palette catalog: one message template.
pub fn catalog() -> Vec<NodeTemplate> {
    vec![NodeTemplate {
        kind: NodeKind::Message,
        title: "Message",
        description: "Send a text message",
    }]
}

/// Drop effect advertised with a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

/// Data carried through the platform drag-and-drop channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub format: &'static str,
    pub data: String,
    pub effect: DropEffect,
}

impl DragPayload {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            format: DRAG_DATA_FORMAT,
            data: type_id.into(),
            effect: DropEffect::Move,
        }
    }

    /// Template kind named by the payload; `None` if empty or unknown.
    pub fn kind(&self) -> Option<NodeKind> {
        if self.format != DRAG_DATA_FORMAT || self.data.is_empty() {
            return None;
        }
        NodeKind::from_type_id(&self.data)
    }
}
