//! Command-line arguments for the `chatflow` binary.

use std::io::Read;
use std::path::{Path, PathBuf};

use chatflow::CanvasOrigin;
use clap::{Parser, Subcommand};

use crate::config::{ConfigOverrides, Error, StoreKind};
use crate::run::Action;

#[derive(Parser, Debug)]
#[command(name = "chatflow")]
#[command(about = "Edit a chatbot message flow: add, connect, edit and save message nodes")]
pub struct Cli {
    /// Store backend: memory, file or sqlite (overrides CHATFLOW_STORE)
    #[arg(long, global = true, value_name = "KIND")]
    pub store: Option<StoreKind>,

    /// Store directory (overrides CHATFLOW_STORE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub store_path: Option<PathBuf>,

    /// Storage key (overrides CHATFLOW_STORAGE_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Start from an empty canvas when nothing is stored
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the current flow
    Show {
        /// Print `{nodes, edges}` as JSON
        #[arg(long)]
        json: bool,
    },
    /// Drop a node from the palette at viewport position (x, y)
    Add {
        #[arg(allow_negative_numbers = true, value_parser = finite_f64)]
        x: f64,
        #[arg(allow_negative_numbers = true, value_parser = finite_f64)]
        y: f64,
        /// Left edge of the canvas on screen
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = finite_f64)]
        origin_x: f64,
        /// Top edge of the canvas on screen
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = finite_f64)]
        origin_y: f64,
        /// Palette template
        #[arg(long, default_value = "messageNode")]
        template: String,
        /// Connect this node to the new one
        #[arg(long, value_name = "SOURCE")]
        after: Option<String>,
    },
    /// Connect source to target (each node allows one outgoing connection)
    Connect { source: String, target: String },
    /// Remove an edge by id, e.g. e1-2
    Disconnect { edge_id: String },
    /// Edit a node's label and/or message
    Edit {
        id: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Delete a node and its connections
    Delete { id: String },
    /// Move a node to canvas position (x, y)
    Move {
        id: String,
        #[arg(allow_negative_numbers = true, value_parser = finite_f64)]
        x: f64,
        #[arg(allow_negative_numbers = true, value_parser = finite_f64)]
        y: f64,
    },
    /// Check whether the flow can be saved
    Validate,
    /// Run editor commands from FILE (or stdin), one per line
    Script { file: Option<PathBuf> },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            store: self.store,
            store_path: self.store_path.clone(),
            storage_key: self.key.clone(),
            no_seed: self.no_seed,
            verbose: self.verbose,
        }
    }
}

impl Command {
    /// Converts to a run [`Action`], reading the script source for `script`.
    pub fn into_action(self) -> Result<Action, Error> {
        let action = match self {
            Command::Show { json } => Action::Show { json },
            Command::Add {
                x,
                y,
                origin_x,
                origin_y,
                template,
                after,
            } => Action::Add {
                x,
                y,
                origin: CanvasOrigin::new(origin_x, origin_y),
                template,
                after,
            },
            Command::Connect { source, target } => Action::Connect { source, target },
            Command::Disconnect { edge_id } => Action::Disconnect { edge_id },
            Command::Edit { id, label, message } => Action::Edit { id, label, message },
            Command::Delete { id } => Action::Delete { id },
            Command::Move { id, x, y } => Action::Move { id, x, y },
            Command::Validate => Action::Validate,
            Command::Script { file } => Action::Script {
                source: read_script(file.as_deref())?,
            },
        };
        Ok(action)
    }
}

/// Coordinate argument: any finite number. NaN and infinities cannot be stored.
fn finite_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", s))
    }
}

/// Script source from `file`, or stdin when `None` or `-`.
pub fn read_script(file: Option<&Path>) -> Result<String, Error> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
