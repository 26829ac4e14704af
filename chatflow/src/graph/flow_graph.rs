//! Flow graph: the authoritative in-memory set of nodes and edges.
//!
//! All mutations go through this type. After each one, subscribed listeners receive
//! a [`GraphEvent`] synchronously, in subscription order. Unknown ids passed to
//! update/remove are no-ops and report `false` / `None`.

use std::fmt;

use super::change::{EdgeChange, GraphEvent, ListenerId, NodeChange};
use super::edge::Edge;
use super::graph_error::GraphError;
use super::logging;
use super::node::{Node, NodeData, NodeDataPatch, Position, DEFAULT_LABEL};

type Listener = Box<dyn FnMut(&GraphEvent)>;

/// Nodes plus edges, kept in insertion order.
///
/// **Interaction**: Mutated by `FlowEditor` commands, by the settings editor on commit/delete
/// and wholesale by load; read by the connection policy and the persistence gateway.
#[derive(Default)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for FlowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FlowGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup graph: nodes `1` and `2` joined by `e1-2`.
    pub fn seeded() -> Self {
        let mut graph = Self::new();
        graph.nodes = vec![
            Node::message(
                "1",
                Position::new(100.0, 100.0),
                NodeData::new(DEFAULT_LABEL, "test message 1"),
            ),
            Node::message(
                "2",
                Position::new(400.0, 200.0),
                NodeData::new(DEFAULT_LABEL, "test message 2"),
            ),
        ];
        graph.edges = vec![Edge::new("1", "2").styled()];
        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.source == id).count()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.target == id).count()
    }

    /// Nodes with no incoming edge, in graph order.
    pub fn roots(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.target == n.id))
            .collect()
    }

    /// Registers a listener; it sees every later mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&GraphEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: GraphEvent) {
        logging::log_mutation(&event);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    /// Adds a node; a node with the same id is replaced in place.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id.clone();
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(existing) => {
                *existing = node;
                self.emit(GraphEvent::NodeUpdated { id });
            }
            None => {
                self.nodes.push(node);
                self.emit(GraphEvent::NodeAdded { id });
            }
        }
    }

    /// Shallow-merges `patch` into the node's data. Returns false for an unknown id.
    pub fn update_node_data(&mut self, id: &str, patch: NodeDataPatch) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.data.merge(patch);
        self.emit(GraphEvent::NodeUpdated { id: id.to_string() });
        true
    }

    /// Moves a node. Returns false for an unknown id.
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.position = position;
        self.emit(GraphEvent::NodeMoved {
            id: id.to_string(),
            position,
        });
        true
    }

    /// Removes the node and every edge whose source or target is `id`.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(pos);

        let (dropped, kept): (Vec<Edge>, Vec<Edge>) =
            std::mem::take(&mut self.edges).into_iter().partition(|e| e.touches(id));
        self.edges = kept;

        self.emit(GraphEvent::NodeRemoved { id: id.to_string() });
        for edge in dropped {
            self.emit(GraphEvent::EdgeRemoved { id: edge.id });
        }
        Some(node)
    }

    /// Appends an edge.
    ///
    /// Both endpoints must exist. Returns `Ok(false)` without change when an edge with the
    /// same id or the same source and target is already present. No out-degree check is
    /// made here; that belongs to `ConnectionPolicy`.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.contains_node(endpoint) {
                return Err(GraphError::UnknownNode(endpoint.clone()));
            }
        }
        let exists = self.edges.iter().any(|e| {
            e.id == edge.id || (e.source == edge.source && e.target == edge.target)
        });
        if exists {
            return Ok(false);
        }
        let id = edge.id.clone();
        self.edges.push(edge);
        self.emit(GraphEvent::EdgeAdded { id });
        Ok(true)
    }

    /// Removes an edge by id.
    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.id == id)?;
        let edge = self.edges.remove(pos);
        self.emit(GraphEvent::EdgeRemoved { id: id.to_string() });
        Some(edge)
    }

    /// Swaps in a whole new node and edge set. Listeners are kept.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        let (nodes, edges) = (self.nodes.len(), self.edges.len());
        self.emit(GraphEvent::Replaced { nodes, edges });
    }

    /// Applies changes reported by direct manipulation; returns how many took effect.
    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) -> usize {
        changes
            .into_iter()
            .filter(|change| match change {
                NodeChange::Position { id, position } => self.move_node(id, *position),
                NodeChange::Remove { id } => self.remove_node(id).is_some(),
            })
            .count()
    }

    /// Applies edge changes reported by direct manipulation; returns how many took effect.
    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) -> usize {
        changes
            .into_iter()
            .filter(|change| match change {
                EdgeChange::Remove { id } => self.remove_edge(id).is_some(),
            })
            .count()
    }
}
