//! Script mode: one editor command per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! select 2
//! message hello there
//! commit
//! connect 2 1
//! drop 250 150 50 50
//! save
//! show --json
//! ```
//!
//! `label` and `message` take the rest of the line verbatim (possibly empty). `drop` takes
//! viewport coordinates and an optional canvas origin. Every line is parsed before any is
//! applied.

use chatflow::{
    CanvasOrigin, Connection, DragPayload, DropEvent, EditorCommand, NodeChange, NodeKind,
    Position,
};
use thiserror::Error;

/// Malformed script line. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{word}'")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: usage: {usage}")]
    Usage { line: usize, usage: &'static str },
    #[error("line {line}: '{value}' is not a finite number")]
    InvalidNumber { line: usize, value: String },
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Command(EditorCommand),
    Show { json: bool },
}

/// Parses a whole script; fails on the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        if let Some(parsed) = parse_line(i + 1, raw)? {
            lines.push(parsed);
        }
    }
    Ok(lines)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptLine>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();
    let usage = |usage: &'static str| ScriptError::Usage { line, usage };

    let command = match (word, args.as_slice()) {
        ("select", [id]) => EditorCommand::SelectNode(id.to_string()),
        ("select", _) => return Err(usage("select <node-id>")),
        ("label", _) => EditorCommand::EditLabel(rest.to_string()),
        ("message", _) => EditorCommand::EditMessage(rest.to_string()),
        ("commit", []) => EditorCommand::CommitSettings,
        ("cancel", []) => EditorCommand::CancelSettings,
        ("delete", []) => EditorCommand::DeleteSelected,
        ("pane", []) => EditorCommand::PaneClick,
        ("save", []) => EditorCommand::Save,
        ("load", []) => EditorCommand::Load,
        ("commit" | "cancel" | "delete" | "pane" | "save" | "load", _) => {
            return Err(usage("takes no arguments"))
        }
        ("show", []) => return Ok(Some(ScriptLine::Show { json: false })),
        ("show", ["--json"]) => return Ok(Some(ScriptLine::Show { json: true })),
        ("show", _) => return Err(usage("show [--json]")),
        ("drop", [x, y]) => drop_at(number(line, x)?, number(line, y)?, CanvasOrigin::default()),
        ("drop", [x, y, left, top]) => drop_at(
            number(line, x)?,
            number(line, y)?,
            CanvasOrigin::new(number(line, left)?, number(line, top)?),
        ),
        ("drop", _) => return Err(usage("drop <x> <y> [<origin-x> <origin-y>]")),
        ("connect", [source, target]) => {
            EditorCommand::Connect(Connection::new(*source, *target))
        }
        ("connect", _) => return Err(usage("connect <source> <target>")),
        ("disconnect", [edge]) => EditorCommand::RemoveEdge(edge.to_string()),
        ("disconnect", _) => return Err(usage("disconnect <edge-id>")),
        ("move", [id, x, y]) => EditorCommand::ApplyNodeChanges(vec![NodeChange::Position {
            id: id.to_string(),
            position: Position::new(number(line, x)?, number(line, y)?),
        }]),
        ("move", _) => return Err(usage("move <node-id> <x> <y>")),
        (other, _) => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: other.to_string(),
            })
        }
    };
    Ok(Some(ScriptLine::Command(command)))
}

/// Finite numbers only; NaN and infinities cannot be stored.
fn number(line: usize, value: &str) -> Result<f64, ScriptError> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        }),
    }
}

fn drop_at(x: f64, y: f64, origin: CanvasOrigin) -> EditorCommand {
    let payload = DragPayload::new(NodeKind::Message.type_id());
    EditorCommand::Drop {
        event: DropEvent::new(payload, x, y),
        origin,
    }
}
