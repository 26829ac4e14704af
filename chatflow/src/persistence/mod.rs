//! # Persistence: snapshots, stores and the save/load gateway
//!
//! ## Overview
//!
//! The whole graph is saved as one [`Snapshot`] record (`{nodes, edges, timestamp}`)
//! under a fixed key in a [`KeyValueStore`]. [`PersistenceGateway`] runs the save
//! protocol (structural check, then a single write) and the load protocol (read, parse,
//! hand back the snapshot).
//!
//! ## Store Implementations
//!
//! | Type              | Persistence        | Use case             | Feature  |
//! |-------------------|--------------------|----------------------|----------|
//! | [`InMemoryStore`] | In-memory          | Dev, tests           | none     |
//! | [`FileStore`]     | One file per key   | Local editing        | none     |
//! | `SqliteStore`     | SQLite file        | Shared local storage | `sqlite` |
//!
//! Concurrent writers sharing a key are last-write-wins; there is no versioning.

mod file_store;
mod gateway;
mod in_memory_store;
mod serializer;
mod snapshot;
mod store;
mod validation;

#[cfg(feature = "sqlite")]
mod sqlite_store;

pub use file_store::FileStore;
pub use gateway::{PersistenceError, PersistenceGateway, SaveReport, SaveStage};
pub use in_memory_store::InMemoryStore;
pub use serializer::{JsonSerializer, Serializer};
pub use snapshot::{Snapshot, DEFAULT_STORAGE_KEY};
pub use store::{KeyValueStore, StoreError};
pub use validation::{validate_for_save, ValidationError};

#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteStore;
