//! # chatflow
//!
//! Editing core for linear chatbot message flows. Message nodes are dropped onto a
//! canvas, joined by directed edges, edited one at a time in a settings panel, and the
//! whole graph is saved to / loaded from a key-value store.
//!
//! ## Design Principles
//!
//! - **One owner**: [`FlowEditor`] owns the [`FlowGraph`] and all session state (selection,
//!   visible panel, pending notices). Nothing is global.
//! - **Commands in, notices out**: every user action is an [`EditorCommand`] processed
//!   synchronously; every failure becomes exactly one [`Notice`] and leaves the editor usable.
//! - **Single outgoing edge**: [`ConnectionPolicy`] admits a connection only if its source
//!   has no outgoing edge yet. Incoming edges are unlimited.
//! - **Whole-record persistence**: [`PersistenceGateway`] writes `{nodes, edges, timestamp}`
//!   in one `put`, after a structural check, and reads it back wholesale.
//!
//! ## Main Modules
//!
//! - [`graph`]: `FlowGraph`, `Node`, `Edge`, `ConnectionPolicy`, change events.
//! - [`palette`]: template catalog, drag payloads, drop-to-node conversion, id generation.
//! - [`editor`]: `FlowEditor`, `SettingsEditor`, `EditorCommand`, `Notice`.
//! - [`persistence`]: `Snapshot`, `KeyValueStore` implementations, `PersistenceGateway`.
//! - [`error`]: `FlowError`, the failure of a single editor action.
//!
//! ## Features
//!
//! - `tracing` (default): structured logging of mutations and save/load stages.
//! - `sqlite`: `SqliteStore` backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chatflow::{
//!     Connection, EditorCommand, FlowEditor, FlowGraph, InMemoryStore, PersistenceGateway,
//! };
//!
//! let gateway = PersistenceGateway::with_default_key(Arc::new(InMemoryStore::new()));
//! let mut editor = FlowEditor::new(gateway).with_graph(FlowGraph::seeded());
//! editor.mount().unwrap();
//!
//! editor.dispatch(EditorCommand::SelectNode("2".into())).unwrap();
//! editor.dispatch(EditorCommand::EditMessage("hello".into())).unwrap();
//! editor.dispatch(EditorCommand::CommitSettings).unwrap();
//! assert_eq!(editor.graph().node("2").unwrap().data.message, "hello");
//!
//! // Node 1 already has an outgoing edge.
//! assert!(editor.dispatch(EditorCommand::Connect(Connection::new("1", "2"))).is_err());
//! editor.dispatch(EditorCommand::Save).unwrap();
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod palette;
pub mod persistence;

pub use editor::{EditorCommand, EditorError, FlowEditor, Notice, NoticeVariant, Panel, SettingsEditor};
pub use error::FlowError;
pub use graph::{
    Connection, ConnectionPolicy, ConnectionRejected, Edge, EdgeChange, FlowGraph, GraphError,
    GraphEvent, IconKind, ListenerId, Node, NodeChange, NodeData, NodeDataPatch, NodeKind,
    Position,
};
pub use palette::{
    catalog, instantiate, CanvasOrigin, DragPayload, DropEvent, NodeIdGenerator, NodeTemplate,
    TimeIdGenerator,
};
pub use persistence::{
    validate_for_save, FileStore, InMemoryStore, JsonSerializer, KeyValueStore,
    PersistenceError, PersistenceGateway, SaveReport, SaveStage, Snapshot, StoreError,
    ValidationError, DEFAULT_STORAGE_KEY,
};
#[cfg(feature = "sqlite")]
pub use persistence::SqliteStore;
