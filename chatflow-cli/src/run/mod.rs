//! Run entry points: run with default config, run_with_options, or run_with_config.
//!
//! Each run opens the configured store, mounts an editor (implicit load), performs one
//! [`Action`] and writes graph output to `Console::out` and notices to `Console::notices`.

pub use crate::config::Error;

mod action;
mod command_error;
mod console;
mod execute;
mod script;
mod store;

use chatflow::{FlowEditor, FlowGraph, PersistenceGateway};

use crate::config::{ConfigOverrides, EditorConfig};

pub use action::Action;
pub use command_error::CommandError;
pub use console::{print_notices, write_graph, Console};
pub use execute::execute;
pub use script::{parse_script, ScriptError, ScriptLine};
pub use store::open_store;

/// Run `action` with config from env (and .env).
pub fn run(action: Action, console: &mut Console<'_>) -> Result<(), Error> {
    dotenv::dotenv().ok();
    let config = EditorConfig::from_env()?;
    run_with_config(&config, action, console)
}

/// Run `action` with config from env and optional overrides (e.g. from CLI).
///
/// Loads `.env`, builds `EditorConfig` from env, applies `options`, then runs.
pub fn run_with_options(
    action: Action,
    options: &ConfigOverrides,
    console: &mut Console<'_>,
) -> Result<(), Error> {
    dotenv::dotenv().ok();
    let mut config = EditorConfig::from_env()?;
    config.apply_options(options);
    run_with_config(&config, action, console)
}

/// Run `action` with the given config; does not read .env.
pub fn run_with_config(
    config: &EditorConfig,
    action: Action,
    console: &mut Console<'_>,
) -> Result<(), Error> {
    let mut editor = open_editor(config)?;
    mount(&mut editor, console)?;
    execute(&mut editor, action, console)
}

/// Builds the editor over the configured store, starting from the seed flow unless
/// `config.seed` is off. Nothing is loaded yet.
pub fn open_editor(config: &EditorConfig) -> Result<FlowEditor, Error> {
    let store = open_store(config)?;
    let gateway = PersistenceGateway::new(store, config.storage_key.clone());
    let graph = if config.seed {
        FlowGraph::seeded()
    } else {
        FlowGraph::new()
    };
    tracing::debug!(
        store = %config.store,
        path = %config.store_path.display(),
        key = %config.storage_key,
        seed = config.seed,
        "Editor opened"
    );
    Ok(FlowEditor::new(gateway).with_graph(graph))
}

/// Implicit load. A load failure is returned after its notice is printed, so a one-shot
/// command never overwrites a record it could not read.
pub fn mount(editor: &mut FlowEditor, console: &mut Console<'_>) -> Result<(), Error> {
    let mounted = editor.mount();
    print_notices(editor, console)?;
    mounted?;
    Ok(())
}
