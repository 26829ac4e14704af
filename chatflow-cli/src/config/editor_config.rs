//! Editor config: which store backs the editor, where it lives, the storage key, and
//! whether to start from the seed flow. Filled from env / .env.
//!
//! Interacts with [`ConfigOverrides`](super::ConfigOverrides) and
//! [`run_with_config`](crate::run_with_config).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chatflow::DEFAULT_STORAGE_KEY;

use super::ConfigOverrides;

/// Error type used for config loading.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Database file name inside the store directory when `StoreKind::Sqlite` is used.
pub const SQLITE_FILE: &str = "chatflow.db";

const DEFAULT_STORE_PATH: &str = ".chatflow";

/// Key-value backend behind the persistence gateway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local; nothing survives the run.
    Memory,
    /// One JSON file per key under the store directory.
    #[default]
    File,
    /// `chatflow.db` under the store directory. Needs the `sqlite` feature.
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => Err(format!(
                "unknown store '{}', expected memory, file or sqlite",
                other
            )),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreKind::Memory => "memory",
            StoreKind::File => "file",
            StoreKind::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

/// Editor config. Can be filled from env / .env.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Store backend. Default: file.
    pub store: StoreKind,
    /// Store directory. Default: `.chatflow`.
    pub store_path: PathBuf,
    /// Key the flow is saved under. Default: `flow-editor-data`.
    pub storage_key: String,
    /// Start from the seed flow (nodes 1 and 2) when nothing is stored. Default: true.
    pub seed: bool,
    /// When true, debug logs are shown.
    pub verbose: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: true,
            verbose: false,
        }
    }
}

impl EditorConfig {
    /// Apply optional overrides from `ConfigOverrides` to this config.
    ///
    /// Only set fields in `options` override; `no_seed` and `verbose` only ever switch
    /// their setting on.
    pub fn apply_options(&mut self, options: &ConfigOverrides) {
        if let Some(store) = options.store {
            self.store = store;
        }
        if let Some(path) = &options.store_path {
            self.store_path = path.clone();
        }
        if let Some(key) = &options.storage_key {
            self.storage_key = key.clone();
        }
        if options.no_seed {
            self.seed = false;
        }
        if options.verbose {
            self.verbose = true;
        }
    }

    /// Use an in-memory store (nothing is persisted between runs).
    pub fn in_memory(mut self) -> Self {
        self.store = StoreKind::Memory;
        self
    }

    /// Use a file store rooted at `dir`.
    pub fn with_file_store(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store = StoreKind::File;
        self.store_path = dir.into();
        self
    }

    /// Start from an empty canvas when nothing is stored.
    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }

    /// Path of the SQLite database used when `store` is `Sqlite`.
    pub fn sqlite_path(&self) -> PathBuf {
        self.store_path.join(SQLITE_FILE)
    }
}

impl EditorConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// All variables are optional: `CHATFLOW_STORE` (memory|file|sqlite),
    /// `CHATFLOW_STORE_PATH`, `CHATFLOW_STORAGE_KEY`, `CHATFLOW_SEED` (true|false).
    /// An unparseable value is an error naming the variable.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        let store = match std::env::var("CHATFLOW_STORE") {
            Ok(s) => s
                .parse()
                .map_err(|e: String| invalid_var("CHATFLOW_STORE", &e))?,
            Err(_) => defaults.store,
        };
        let store_path = std::env::var("CHATFLOW_STORE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);
        let storage_key = std::env::var("CHATFLOW_STORAGE_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.storage_key);
        let seed = match std::env::var("CHATFLOW_SEED") {
            Ok(s) => parse_bool(&s).ok_or_else(|| {
                invalid_var("CHATFLOW_SEED", &format!("'{}' is not true or false", s))
            })?,
            Err(_) => defaults.seed,
        };
        Ok(Self {
            store,
            store_path,
            storage_key,
            seed,
            verbose: false,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid_var(name: &str, reason: &str) -> Error {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!("{} is invalid: {}", name, reason),
    ))
}
