//! Output sinks: graph output and user notices.

use std::io::{self, Write};

use chatflow::{Edge, FlowEditor, FlowGraph, Node, Notice};
use serde::Serialize;

use super::Error;

/// Where a run writes. The binary passes stdout and stderr; tests pass buffers.
pub struct Console<'a> {
    /// Graph output and command results.
    pub out: &'a mut dyn Write,
    /// Notices, one per line.
    pub notices: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, notices: &'a mut dyn Write) -> Self {
        Self { out, notices }
    }
}

#[derive(Serialize)]
struct GraphView<'g> {
    nodes: &'g [Node],
    edges: &'g [Edge],
}

/// Writes every queued notice; returns how many were destructive.
pub fn print_notices(editor: &mut FlowEditor, console: &mut Console<'_>) -> io::Result<usize> {
    let mut destructive = 0;
    for notice in editor.drain_notices() {
        if notice.is_destructive() {
            destructive += 1;
        }
        write_notice(&notice, console.notices)?;
    }
    Ok(destructive)
}

pub(crate) fn write_notice(notice: &Notice, w: &mut dyn Write) -> io::Result<()> {
    let prefix = if notice.is_destructive() { "error: " } else { "" };
    writeln!(w, "{}{}: {}", prefix, notice.title, notice.description)
}

/// Prints the graph as an indented listing, or as `{nodes, edges}` JSON.
pub fn write_graph(graph: &FlowGraph, json: bool, out: &mut dyn Write) -> Result<(), Error> {
    if json {
        let view = GraphView {
            nodes: graph.nodes(),
            edges: graph.edges(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        return Ok(());
    }

    writeln!(out, "nodes: {}", graph.len())?;
    for node in graph.nodes() {
        writeln!(
            out,
            "  {}  ({}, {})  {}: {}",
            node.id, node.position.x, node.position.y, node.data.label, node.data.message
        )?;
    }
    writeln!(out, "edges: {}", graph.edges().len())?;
    for edge in graph.edges() {
        writeln!(out, "  {}  {} -> {}", edge.id, edge.source, edge.target)?;
    }
    Ok(())
}
