//! Settings editor: edits one selected node's label and message.
//!
//! Fields are copied from the node when it is opened; edits stay local until
//! [`commit`](SettingsEditor::commit). Closing without committing discards them.

use crate::graph::{FlowGraph, Node, NodeDataPatch};

use super::editor_error::EditorError;

/// In-progress edit of a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    node_id: String,
    label: String,
    message: String,
    can_delete: bool,
}

impl SettingsEditor {
    /// Opens the editor on `node`, pre-filled from its current data.
    ///
    /// `can_delete` is false when the host gave the panel no delete capability; `delete`
    /// then refuses.
    pub fn open(node: &Node, can_delete: bool) -> Self {
        Self {
            node_id: node.id.clone(),
            label: node.data.label.clone(),
            message: node.data.message.clone(),
            can_delete,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn can_delete(&self) -> bool {
        self.can_delete
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Characters in the message field.
    pub fn char_count(&self) -> usize {
        self.message.chars().count()
    }

    /// Writes both fields back to the node. Returns false if the node is gone.
    pub fn commit(self, graph: &mut FlowGraph) -> bool {
        let patch = NodeDataPatch {
            label: Some(self.label),
            message: Some(self.message),
        };
        graph.update_node_data(&self.node_id, patch)
    }

    /// Removes the node (and its edges) from the graph.
    pub fn delete(self, graph: &mut FlowGraph) -> Result<Option<Node>, EditorError> {
        if !self.can_delete {
            return Err(EditorError::DeleteUnavailable);
        }
        Ok(graph.remove_node(&self.node_id))
    }

    /// Closes without writing anything.
    pub fn cancel(self) {}
}
