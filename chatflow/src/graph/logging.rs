//! Logging utilities for graph editing.
//!
//! Provides structured logging for node/edge mutations, rejected connections and
//! persistence stages. With the `tracing` feature off, only warnings reach stderr.

/// Log a node or edge mutation.
pub fn log_mutation(event: &crate::graph::GraphEvent) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?event, "Graph mutated");

    #[cfg(not(feature = "tracing"))]
    let _ = event;
}

/// Log a connection refused by the connection policy.
pub fn log_connection_rejected(rejection: &crate::graph::ConnectionRejected) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        source = %rejection.source_id,
        existing = %rejection.existing_edge,
        "Connection rejected"
    );

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Connection rejected: {}", rejection);
}

/// Log a save-protocol stage transition.
pub fn log_save_stage(stage: crate::persistence::SaveStage) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?stage, "Save stage");

    #[cfg(not(feature = "tracing"))]
    let _ = stage;
}

/// Log a completed save.
pub fn log_save_complete(key: &str, nodes: usize, edges: usize) {
    #[cfg(feature = "tracing")]
    tracing::info!(key = key, nodes = nodes, edges = edges, "Flow saved");

    #[cfg(not(feature = "tracing"))]
    let _ = (key, nodes, edges);
}

/// Log a completed load. `None` when nothing was stored under `key`.
pub fn log_load_complete(key: &str, counts: Option<(usize, usize)>) {
    #[cfg(feature = "tracing")]
    match counts {
        Some((nodes, edges)) => tracing::info!(key = key, nodes = nodes, edges = edges, "Flow loaded"),
        None => tracing::debug!(key = key, "No saved flow"),
    }

    #[cfg(not(feature = "tracing"))]
    let _ = (key, counts);
}

/// Log a failed editor action.
pub fn log_flow_error(error: &crate::error::FlowError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%error, "Editor action failed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Editor action failed: {}", error);
}
