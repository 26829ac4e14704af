//! Key-value store trait for persisted flow records.
//!
//! A store holds opaque string values under string keys, the way browser local
//! storage does. Writes replace the whole value under a key in one step.

use thiserror::Error;

/// Error from a key-value store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend read/write failure (I/O, database, quota).
    #[error("storage error: {0}")]
    Storage(String),
    /// Value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string key-value storage.
///
/// **Interaction**: Held as `Arc<dyn KeyValueStore>` by `PersistenceGateway`.
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
