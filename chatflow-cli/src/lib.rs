//! chatflow-cli library: hosts the flow editor from the command line.
//!
//! Reads store settings from env / .env, mounts a [`FlowEditor`](chatflow::FlowEditor)
//! over the configured store (implicit load), performs one [`Action`], and saves after
//! one-shot mutations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chatflow_cli::{run_with_config, Action, Console, EditorConfig};
//!
//! let config = EditorConfig::default().with_file_store(".chatflow");
//! let (mut out, mut notices) = (std::io::stdout(), std::io::stderr());
//! let mut console = Console::new(&mut out, &mut notices);
//! run_with_config(&config, Action::Show { json: false }, &mut console)?;
//! # Ok::<(), chatflow_cli::Error>(())
//! ```

mod cli;
mod config;
mod run;

pub use cli::{read_script, Cli, Command};
pub use config::{ConfigOverrides, EditorConfig, Error, StoreKind, SQLITE_FILE};
pub use run::{
    execute, mount, open_editor, open_store, parse_script, print_notices, run, run_with_config,
    run_with_options, write_graph, Action, CommandError, Console, ScriptError, ScriptLine,
};

#[cfg(test)]
mod tests;
