//! Optional overrides for the editor config (CLI args or programmatic).
//!
//! Used by [`EditorConfig::apply_options`](super::EditorConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options).

use std::path::PathBuf;

use super::StoreKind;

/// Optional overrides: store backend, store directory, storage key, seeding, verbosity.
///
/// All fields are optional; only set fields override the base config (from env).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub store: Option<StoreKind>,
    pub store_path: Option<PathBuf>,
    pub storage_key: Option<String>,
    /// Start from an empty canvas instead of the seed flow.
    pub no_seed: bool,
    pub verbose: bool,
}
