//! Connection policy: admits a proposed edge only if its source has no outgoing edge yet.
//!
//! Evaluated strictly before the edge is added. A node may still receive any number
//! of incoming edges.

use thiserror::Error;

use super::edge::Edge;

/// A proposed connection from a source handle to a target handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The edge this connection becomes once admitted: id `e<source>-<target>`, styled.
    pub fn into_edge(self) -> Edge {
        Edge::new(self.source, self.target).styled()
    }
}

/// Rejected connection: the source node already has an outgoing edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node {source_id} already has an outgoing connection ({existing_edge})")]
pub struct ConnectionRejected {
    pub source_id: String,
    pub existing_edge: String,
}

/// Single-outgoing-edge-per-node rule.
pub struct ConnectionPolicy;

impl ConnectionPolicy {
    /// True when no edge in `current` already leaves `proposed.source`.
    pub fn can_connect(proposed: &Connection, current: &[Edge]) -> bool {
        Self::check(proposed, current).is_ok()
    }

    /// Like [`can_connect`](Self::can_connect) but names the blocking edge.
    pub fn check(proposed: &Connection, current: &[Edge]) -> Result<(), ConnectionRejected> {
        match current.iter().find(|e| e.source == proposed.source) {
            Some(existing) => Err(ConnectionRejected {
                source_id: proposed.source.clone(),
                existing_edge: existing.id.clone(),
            }),
            None => Ok(()),
        }
    }
}
