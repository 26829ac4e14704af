//! Edge record: directed link from `source` to `target` plus presentation tags.

use serde::{Deserialize, Serialize};

/// Stroke colour tag applied to accepted connections.
pub const EDGE_STROKE: &str = "hsl(var(--flow-edge))";

/// Edge type tag applied to accepted connections.
pub const EDGE_TYPE: &str = "smoothstep";

/// Stroke style persisted alongside an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: EDGE_STROKE.to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<EdgeStyle>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
}

impl Edge {
    /// Edge id derived from its endpoints: `e<source>-<target>`.
    pub fn id_for(source: &str, target: &str) -> String {
        format!("e{}-{}", source, target)
    }

    /// Plain edge with a derived id and no presentation tags.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Self::id_for(&source, &target),
            source,
            target,
            style: None,
            edge_type: None,
        }
    }

    /// Adds the stroke style and `smoothstep` type used for user-made connections.
    pub fn styled(mut self) -> Self {
        self.style = Some(EdgeStyle::default());
        self.edge_type = Some(EDGE_TYPE.to_string());
        self
    }

    /// True when `node_id` is either endpoint.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
