//! Persisted snapshot record: `{ nodes, edges, timestamp }`.
//!
//! Written and read wholesale under one key. There is no schema version field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::graph::{Edge, FlowGraph, Node};

/// Storage key used by the browser editor.
pub const DEFAULT_STORAGE_KEY: &str = "flow-editor-data";

/// Full graph as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub edges: Vec<Edge>,
    /// Epoch milliseconds at save time.
    #[serde(default)]
    pub timestamp: u64,
}

impl Snapshot {
    /// Copies the graph's nodes and edges.
    pub fn capture(graph: &FlowGraph, timestamp: u64) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
            timestamp,
        }
    }
}

/// `null` reads like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
