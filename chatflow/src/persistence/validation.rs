//! Save-time structural check.
//!
//! With more than one node, at most one node may lack an incoming edge. The check is
//! literal: a fully isolated node counts the same as a legitimate start node.

use thiserror::Error;

use crate::graph::FlowGraph;

/// Save refused by the structural check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// More than one node has no incoming edge ("empty target handles").
    #[error("more than one node has empty target handles: {}", ids.join(", "))]
    MultipleRoots { ids: Vec<String> },
}

/// Checks the graph may be saved.
pub fn validate_for_save(graph: &FlowGraph) -> Result<(), ValidationError> {
    if graph.len() <= 1 {
        return Ok(());
    }
    let roots = graph.roots();
    if roots.len() > 1 {
        return Err(ValidationError::MultipleRoots {
            ids: roots.into_iter().map(|n| n.id.clone()).collect(),
        });
    }
    Ok(())
}
