//! Graph mutation error.
//!
//! Returned by `FlowGraph::add_edge` when an endpoint does not name a node in the graph.

use thiserror::Error;

/// Error when mutating a flow graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint was not registered via `add_node`.
    #[error("node not found: {0}")]
    UnknownNode(String),
}
