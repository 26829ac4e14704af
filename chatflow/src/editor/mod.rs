//! Editor session: settings editor, command dispatch and user notices.
//!
//! [`FlowEditor`] is the single owner of the graph and the session state (selection,
//! visible panel, queued notices). Every user action is an [`EditorCommand`].

mod command;
mod editor_error;
mod notice;
mod session;
mod settings;

pub use command::EditorCommand;
pub use editor_error::EditorError;
pub use notice::{Notice, NoticeVariant};
pub use session::{FlowEditor, Panel};
pub use settings::SettingsEditor;
