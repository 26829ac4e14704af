use thiserror::Error;

use super::script::ScriptError;

/// Command failures detected by the host before anything reaches the editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("no node with id '{0}'")]
    UnknownNode(String),
    #[error("no edge with id '{0}'")]
    UnknownEdge(String),
    #[error("an edge with id '{0}' already exists")]
    EdgeExists(String),
    #[error("unknown node template '{0}'")]
    UnknownTemplate(String),
    #[error("nothing to edit: pass --label and/or --message")]
    NothingToEdit,
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("{failed} script command(s) failed")]
    ScriptFailed { failed: usize },
}
