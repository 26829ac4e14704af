//! Flow graph: message nodes, directed edges, connection policy and change notifications.
//!
//! Build the graph with `add_node` / `add_edge`, or start from [`FlowGraph::seeded`].
//! User-initiated connections go through [`ConnectionPolicy`] first, which enforces
//! at most one outgoing edge per node.

mod change;
mod connection_policy;
mod edge;
mod flow_graph;
mod graph_error;
pub mod logging;
mod node;

pub use change::{EdgeChange, GraphEvent, ListenerId, NodeChange};
pub use connection_policy::{Connection, ConnectionPolicy, ConnectionRejected};
pub use edge::{Edge, EdgeStyle, EDGE_STROKE, EDGE_TYPE};
pub use flow_graph::FlowGraph;
pub use graph_error::GraphError;
pub use node::{
    IconKind, Node, NodeData, NodeDataPatch, NodeKind, Position, DEFAULT_LABEL, DEFAULT_MESSAGE,
};
