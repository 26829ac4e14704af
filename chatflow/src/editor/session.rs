//! Editor session: the controller that owns the graph and all UI session state.
//!
//! Selection, panel visibility and pending notices are plain fields here; views read
//! them through accessors and change them only by dispatching [`EditorCommand`]s.

use crate::error::FlowError;
use crate::graph::logging;
use crate::graph::{ConnectionPolicy, FlowGraph, GraphEvent, ListenerId, Node};
use crate::palette::{instantiate, NodeIdGenerator, TimeIdGenerator};
use crate::persistence::{PersistenceGateway, SaveStage};

use super::command::EditorCommand;
use super::editor_error::EditorError;
use super::notice::Notice;
use super::settings::SettingsEditor;

/// Which side panel is visible. Exactly one is, driven by the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Node palette.
    Nodes,
    /// Settings editor for the selected node.
    Settings,
}

/// Editor controller.
///
/// **Interaction**: Hosts build it with a [`PersistenceGateway`], call [`mount`](Self::mount)
/// once, then feed user actions to [`dispatch`](Self::dispatch) and show what
/// [`drain_notices`](Self::drain_notices) returns.
pub struct FlowEditor {
    graph: FlowGraph,
    settings: Option<SettingsEditor>,
    gateway: PersistenceGateway,
    ids: Box<dyn NodeIdGenerator>,
    can_delete: bool,
    notices: Vec<Notice>,
}

impl FlowEditor {
    /// Empty editor persisting through `gateway`.
    pub fn new(gateway: PersistenceGateway) -> Self {
        Self {
            graph: FlowGraph::new(),
            settings: None,
            gateway,
            ids: Box::new(TimeIdGenerator::new()),
            can_delete: true,
            notices: Vec::new(),
        }
    }

    /// Starts from `graph` instead of an empty one (e.g. [`FlowGraph::seeded`]).
    pub fn with_graph(mut self, graph: FlowGraph) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_id_generator(mut self, ids: impl NodeIdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Settings editor opens without a delete capability.
    pub fn without_delete(mut self) -> Self {
        self.can_delete = false;
        self
    }

    /// Implicit load on first display: stored flow replaces the current graph if present.
    pub fn mount(&mut self) -> Result<(), FlowError> {
        self.dispatch(EditorCommand::Load)
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// Id of the selected node, if any.
    pub fn selection(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.node_id())
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selection().and_then(|id| self.graph.node(id))
    }

    pub fn settings(&self) -> Option<&SettingsEditor> {
        self.settings.as_ref()
    }

    pub fn panel(&self) -> Panel {
        if self.settings.is_some() {
            Panel::Settings
        } else {
            Panel::Nodes
        }
    }

    pub fn save_stage(&self) -> SaveStage {
        self.gateway.stage()
    }

    pub fn storage_key(&self) -> &str {
        self.gateway.key()
    }

    /// Forwards graph change notifications to `listener`.
    pub fn subscribe(&mut self, listener: impl FnMut(&GraphEvent) + 'static) -> ListenerId {
        self.graph.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.graph.unsubscribe(id)
    }

    /// Notices queued since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Processes one command. A failure is queued as exactly one notice and returned.
    pub fn dispatch(&mut self, command: EditorCommand) -> Result<(), FlowError> {
        let result = self.execute(command);
        if let Err(err) = &result {
            logging::log_flow_error(err);
            self.notices.push(Notice::from(err));
        }
        result
    }

    fn execute(&mut self, command: EditorCommand) -> Result<(), FlowError> {
        match command {
            EditorCommand::AddNode(node) => {
                self.graph.add_node(node);
            }
            EditorCommand::Drop { event, origin } => {
                if let Some(mut node) = instantiate(&event, origin, self.ids.as_mut()) {
                    // Generated ids only grow, so this ends.
                    while self.graph.contains_node(&node.id) {
                        node.id = self.ids.next_id();
                    }
                    self.graph.add_node(node);
                }
            }
            EditorCommand::Connect(connection) => {
                if let Err(rejection) = ConnectionPolicy::check(&connection, self.graph.edges()) {
                    logging::log_connection_rejected(&rejection);
                    return Err(rejection.into());
                }
                self.graph.add_edge(connection.into_edge())?;
            }
            EditorCommand::UpdateNodeData { id, patch } => {
                self.graph.update_node_data(&id, patch);
            }
            EditorCommand::RemoveNode(id) => {
                self.graph.remove_node(&id);
                self.close_if_gone();
            }
            EditorCommand::RemoveEdge(id) => {
                self.graph.remove_edge(&id);
            }
            EditorCommand::ApplyNodeChanges(changes) => {
                self.graph.apply_node_changes(changes);
                self.close_if_gone();
            }
            EditorCommand::ApplyEdgeChanges(changes) => {
                self.graph.apply_edge_changes(changes);
            }
            EditorCommand::SelectNode(id) => {
                // Clicking an id that is not on the canvas is ignored.
                if let Some(node) = self.graph.node(&id) {
                    self.settings = Some(SettingsEditor::open(node, self.can_delete));
                }
            }
            EditorCommand::PaneClick | EditorCommand::CancelSettings => {
                if let Some(settings) = self.settings.take() {
                    settings.cancel();
                }
            }
            EditorCommand::EditLabel(label) => {
                self.settings_mut()?.set_label(label);
            }
            EditorCommand::EditMessage(message) => {
                self.settings_mut()?.set_message(message);
            }
            EditorCommand::CommitSettings => {
                let settings = self.settings.take().ok_or(EditorError::NoSelection)?;
                settings.commit(&mut self.graph);
            }
            EditorCommand::DeleteSelected => {
                let settings = self.settings.as_ref().ok_or(EditorError::NoSelection)?;
                if !settings.can_delete() {
                    return Err(EditorError::DeleteUnavailable.into());
                }
                if let Some(settings) = self.settings.take() {
                    settings.delete(&mut self.graph)?;
                    self.notices.push(Notice::node_deleted());
                }
            }
            EditorCommand::Save => {
                self.gateway.save(&self.graph)?;
                self.notices.push(Notice::flow_saved());
            }
            EditorCommand::Load => {
                if let Some(snapshot) = self.gateway.load()? {
                    self.graph.replace(snapshot.nodes, snapshot.edges);
                    self.settings = None;
                    self.notices.push(Notice::flow_loaded());
                }
            }
        }
        Ok(())
    }

    fn settings_mut(&mut self) -> Result<&mut SettingsEditor, EditorError> {
        self.settings.as_mut().ok_or(EditorError::NoSelection)
    }

    /// Drops the selection when its node no longer exists.
    fn close_if_gone(&mut self) {
        let gone = self
            .settings
            .as_ref()
            .is_some_and(|s| !self.graph.contains_node(s.node_id()));
        if gone {
            self.settings = None;
        }
    }
}
