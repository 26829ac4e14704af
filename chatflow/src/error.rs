//! Editor error types.
//!
//! Every failed editor action is one [`FlowError`]. All of them are recoverable: the
//! editor stays usable and the host shows the matching notice once.

use thiserror::Error;

use crate::editor::EditorError;
use crate::graph::{ConnectionRejected, GraphError};
use crate::persistence::{PersistenceError, ValidationError};

/// Failed editor action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Connection refused: the source already has an outgoing edge.
    #[error("connection not allowed: {0}")]
    PolicyViolation(#[from] ConnectionRejected),

    /// Save refused by the structural check; nothing written.
    #[error("cannot save flow: {0}")]
    Validation(#[from] ValidationError),

    /// Storage read/write/parse failure.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Edge endpoint does not exist.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Settings editor used without a selection or delete capability.
    #[error(transparent)]
    Editor(#[from] EditorError),
}
