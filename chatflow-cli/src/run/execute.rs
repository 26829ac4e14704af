//! Applies an [`Action`] to a mounted editor.

use std::io::Write;

use chatflow::{
    validate_for_save, Connection, DragPayload, DropEvent, EditorCommand, FlowEditor, FlowError,
    NodeChange, NodeKind, Notice, Position,
};

use super::action::Action;
use super::command_error::CommandError;
use super::console::{print_notices, write_graph, write_notice, Console};
use super::script::{parse_script, ScriptLine};
use super::Error;

/// Runs `action`. One-shot mutations save afterwards; a refused save is an error.
pub fn execute(
    editor: &mut FlowEditor,
    action: Action,
    console: &mut Console<'_>,
) -> Result<(), Error> {
    let saves = action.saves();
    match action {
        Action::Show { json } => write_graph(editor.graph(), json, console.out)?,
        Action::Validate => validate(editor, console)?,
        Action::Script { source } => run_script(editor, &source, console)?,
        Action::Add {
            x,
            y,
            origin,
            template,
            after,
        } => {
            if NodeKind::from_type_id(&template).is_none() {
                return Err(CommandError::UnknownTemplate(template).into());
            }
            if let Some(source) = &after {
                require_node(editor, source)?;
            }
            let before = editor.graph().len();
            let event = DropEvent::new(DragPayload::new(template), x, y);
            dispatch(editor, EditorCommand::Drop { event, origin }, console)?;
            let added = match editor.graph().nodes().last() {
                Some(node) if editor.graph().len() > before => node.id.clone(),
                _ => return Ok(()),
            };
            writeln!(console.out, "added node {}", added)?;
            if let Some(source) = after {
                let connection = Connection::new(source, added);
                dispatch(editor, EditorCommand::Connect(connection), console)?;
            }
        }
        Action::Connect { source, target } => {
            let connection = Connection::new(source, target);
            let id = connection.clone().into_edge().id;
            // Distinct endpoint pairs can derive the same id ("1"->"2-3", "1-2"->"3").
            if editor.graph().edge(&id).is_some() {
                return Err(CommandError::EdgeExists(id).into());
            }
            dispatch(editor, EditorCommand::Connect(connection), console)?;
            writeln!(console.out, "connected {}", id)?;
        }
        Action::Disconnect { edge_id } => {
            if editor.graph().edge(&edge_id).is_none() {
                return Err(CommandError::UnknownEdge(edge_id).into());
            }
            dispatch(editor, EditorCommand::RemoveEdge(edge_id), console)?;
        }
        Action::Edit { id, label, message } => {
            require_node(editor, &id)?;
            if label.is_none() && message.is_none() {
                return Err(CommandError::NothingToEdit.into());
            }
            dispatch(editor, EditorCommand::SelectNode(id), console)?;
            if let Some(label) = label {
                dispatch(editor, EditorCommand::EditLabel(label), console)?;
            }
            if let Some(message) = message {
                dispatch(editor, EditorCommand::EditMessage(message), console)?;
            }
            dispatch(editor, EditorCommand::CommitSettings, console)?;
        }
        Action::Delete { id } => {
            require_node(editor, &id)?;
            dispatch(editor, EditorCommand::SelectNode(id), console)?;
            dispatch(editor, EditorCommand::DeleteSelected, console)?;
        }
        Action::Move { id, x, y } => {
            require_node(editor, &id)?;
            let change = NodeChange::Position {
                id,
                position: Position::new(x, y),
            };
            dispatch(editor, EditorCommand::ApplyNodeChanges(vec![change]), console)?;
        }
    }

    if saves {
        dispatch(editor, EditorCommand::Save, console)?;
    }
    Ok(())
}

/// Dispatches one command and prints whatever notices it queued.
fn dispatch(
    editor: &mut FlowEditor,
    command: EditorCommand,
    console: &mut Console<'_>,
) -> Result<(), Error> {
    let result = editor.dispatch(command);
    print_notices(editor, console)?;
    result?;
    Ok(())
}

fn require_node(editor: &FlowEditor, id: &str) -> Result<(), CommandError> {
    if editor.graph().contains_node(id) {
        Ok(())
    } else {
        Err(CommandError::UnknownNode(id.to_string()))
    }
}

fn validate(editor: &FlowEditor, console: &mut Console<'_>) -> Result<(), Error> {
    let graph = editor.graph();
    if let Err(e) = validate_for_save(graph) {
        let err = FlowError::from(e);
        write_notice(&Notice::from(&err), console.notices)?;
        return Err(err.into());
    }
    writeln!(
        console.out,
        "ok: {} nodes, {} edges can be saved",
        graph.len(),
        graph.edges().len()
    )?;
    Ok(())
}

/// Parses the whole script, then applies it line by line. Failed commands are counted
/// and reported at the end; they do not stop the script.
fn run_script(editor: &mut FlowEditor, source: &str, console: &mut Console<'_>) -> Result<(), Error> {
    let lines = parse_script(source).map_err(CommandError::from)?;
    let mut failed = 0;
    for line in lines {
        match line {
            ScriptLine::Show { json } => write_graph(editor.graph(), json, console.out)?,
            ScriptLine::Command(command) => {
                tracing::debug!(?command, "Script command");
                if editor.dispatch(command).is_err() {
                    failed += 1;
                }
                print_notices(editor, console)?;
            }
        }
    }
    if failed > 0 {
        return Err(CommandError::ScriptFailed { failed }.into());
    }
    Ok(())
}
