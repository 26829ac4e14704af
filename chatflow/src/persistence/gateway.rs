//! Persistence gateway: save/load the whole graph under one storage key.
//!
//! Save runs `Idle -> Validating -> {Aborted | Writing -> {Succeeded | Failed}}` within a
//! single call. Nothing is written unless validation passes, and the write itself is one
//! `put` of the full record. Load never touches the graph; the caller applies the returned
//! snapshot, so a failed load leaves the in-memory graph as it was.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::error::FlowError;
use crate::graph::logging;
use crate::graph::FlowGraph;
use crate::palette::now_millis;

use super::serializer::{JsonSerializer, Serializer};
use super::snapshot::{Snapshot, DEFAULT_STORAGE_KEY};
use super::store::{KeyValueStore, StoreError};
use super::validation::validate_for_save;

/// Storage read/write/parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("failed to save flow: {0}")]
    Save(StoreError),
    #[error("failed to load flow: {0}")]
    Load(StoreError),
}

/// Where the most recent save got to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStage {
    #[default]
    Idle,
    Validating,
    /// Validation refused the graph; nothing written.
    Aborted,
    Writing,
    Succeeded,
    /// Encoding or the store write failed; nothing written.
    Failed,
}

/// What a successful save wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub key: String,
    pub timestamp: u64,
    pub nodes: usize,
    pub edges: usize,
}

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

/// Saves and loads [`Snapshot`]s through a [`KeyValueStore`].
///
/// **Interaction**: Owned by `FlowEditor`; reads `FlowGraph` on save, hands back a
/// `Snapshot` on load.
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
    key: String,
    serializer: JsonSerializer,
    clock: Clock,
    stage: SaveStage,
}

impl fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("key", &self.key)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

impl PersistenceGateway {
    /// Gateway writing under `key`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            serializer: JsonSerializer,
            clock: Box::new(now_millis),
            stage: SaveStage::Idle,
        }
    }

    /// Gateway writing under [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// Replaces the timestamp source (epoch millis).
    pub fn with_clock(self, clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ..self
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stage reached by the most recent save.
    pub fn stage(&self) -> SaveStage {
        self.stage
    }

    fn enter(&mut self, stage: SaveStage) {
        self.stage = stage;
        logging::log_save_stage(stage);
    }

    /// Validates, then writes `{nodes, edges, timestamp}` in one `put`.
    ///
    /// Returns `FlowError::Validation` if more than one node lacks an incoming edge and
    /// `FlowError::Persistence` if encoding or the write fails.
    pub fn save(&mut self, graph: &FlowGraph) -> Result<SaveReport, FlowError> {
        self.enter(SaveStage::Validating);
        if let Err(e) = validate_for_save(graph) {
            self.enter(SaveStage::Aborted);
            return Err(e.into());
        }

        self.enter(SaveStage::Writing);
        let snapshot = Snapshot::capture(graph, (self.clock)());
        let written = check_positions(&snapshot)
            .and_then(|()| self.serializer.serialize(&snapshot))
            .and_then(|text| self.store.put(&self.key, &text));
        if let Err(e) = written {
            self.enter(SaveStage::Failed);
            return Err(PersistenceError::Save(e).into());
        }

        self.enter(SaveStage::Succeeded);
        logging::log_save_complete(&self.key, snapshot.nodes.len(), snapshot.edges.len());
        Ok(SaveReport {
            key: self.key.clone(),
            timestamp: snapshot.timestamp,
            nodes: snapshot.nodes.len(),
            edges: snapshot.edges.len(),
        })
    }

    /// Reads the stored snapshot; `Ok(None)` when nothing is stored under the key.
    pub fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let Some(text) = self.store.get(&self.key).map_err(PersistenceError::Load)? else {
            logging::log_load_complete(&self.key, None);
            return Ok(None);
        };
        let snapshot: Snapshot =
            Serializer::<Snapshot>::deserialize(&self.serializer, &text)
                .map_err(PersistenceError::Load)?;
        logging::log_load_complete(
            &self.key,
            Some((snapshot.nodes.len(), snapshot.edges.len())),
        );
        Ok(Some(snapshot))
    }
}

/// serde_json writes NaN and infinities as `null`, which would never load back.
fn check_positions(snapshot: &Snapshot) -> Result<(), StoreError> {
    match snapshot.nodes.iter().find(|n| !n.position.is_finite()) {
        Some(node) => Err(StoreError::Serialization(format!(
            "node {} has a non-finite position ({}, {})",
            node.id, node.position.x, node.position.y
        ))),
        None => Ok(()),
    }
}
