//! Store construction from [`EditorConfig`].

use std::sync::Arc;

use chatflow::{FileStore, InMemoryStore, KeyValueStore};

use crate::config::{EditorConfig, StoreKind};

use super::Error;

/// Opens the store `config` names.
pub fn open_store(config: &EditorConfig) -> Result<Arc<dyn KeyValueStore>, Error> {
    match config.store {
        StoreKind::Memory => Ok(Arc::new(InMemoryStore::new())),
        StoreKind::File => Ok(Arc::new(FileStore::new(config.store_path.clone()))),
        StoreKind::Sqlite => open_sqlite(config),
    }
}

#[cfg(feature = "sqlite")]
fn open_sqlite(config: &EditorConfig) -> Result<Arc<dyn KeyValueStore>, Error> {
    std::fs::create_dir_all(&config.store_path)?;
    let store = chatflow::SqliteStore::open(config.sqlite_path())?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(_config: &EditorConfig) -> Result<Arc<dyn KeyValueStore>, Error> {
    Err("CHATFLOW_STORE=sqlite requires the `sqlite` feature".into())
}
