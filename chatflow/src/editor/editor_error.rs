use thiserror::Error;

/// Settings-editor misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Commit/delete/edit with no node selected.
    #[error("no node selected")]
    NoSelection,
    /// Delete requested but the host supplied no delete capability.
    #[error("node deletion is not available")]
    DeleteUnavailable,
}
