//! Configuration for hosting the flow editor.
//!
//! Re-exports [`EditorConfig`], [`StoreKind`], [`ConfigOverrides`] and config [`Error`].

mod config_overrides;
mod editor_config;

pub use config_overrides::ConfigOverrides;
pub use editor_config::{EditorConfig, Error, StoreKind, SQLITE_FILE};
