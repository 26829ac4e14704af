//! Node record: id, kind, canvas position and editable data.
//!
//! The domain record carries no presentation handles; the icon shown for a node is
//! resolved from its [`NodeKind`] at the view layer via [`NodeKind::icon`].

use serde::{Deserialize, Serialize};

/// Default label given to freshly instantiated message nodes.
pub const DEFAULT_LABEL: &str = "Send Message";

/// Default message text given to freshly instantiated message nodes.
pub const DEFAULT_MESSAGE: &str = "New message";

/// Canvas-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// False if either coordinate is NaN or infinite. JSON cannot carry such values.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Node kind. Only message nodes exist.
///
/// Serialised as `"messageNode"` to stay compatible with records written by the
/// browser editor; `"message"` is accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[default]
    #[serde(rename = "messageNode", alias = "message")]
    Message,
}

impl NodeKind {
    /// Identifier carried in drag payloads and stored records.
    pub fn type_id(&self) -> &'static str {
        match self {
            NodeKind::Message => "messageNode",
        }
    }

    /// Parses a drag-payload / record type identifier.
    pub fn from_type_id(id: &str) -> Option<Self> {
        match id {
            "messageNode" | "message" => Some(NodeKind::Message),
            _ => None,
        }
    }

    /// Icon the view layer draws for this kind.
    pub fn icon(&self) -> IconKind {
        match self {
            NodeKind::Message => IconKind::MessageSquare,
        }
    }
}

/// Presentation metadata: which icon a renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    MessageSquare,
}

/// Editable content of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub message: String,
}

impl NodeData {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }

    /// Shallow merge: only fields set in `patch` overwrite.
    pub fn merge(&mut self, patch: NodeDataPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

/// Partial update for [`NodeData`], applied by `FlowGraph::update_node_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDataPatch {
    pub label: Option<String>,
    pub message: Option<String>,
}

impl NodeDataPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            label: None,
            message: Some(message.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.message.is_none()
    }
}

/// A message node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    /// Creates a message node.
    pub fn message(id: impl Into<String>, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Message,
            position,
            data,
        }
    }
}
