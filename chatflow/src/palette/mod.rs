//! Node palette: the template catalog, drag payloads and drop handling.

mod canvas_drop;
mod id;
mod template;

pub use canvas_drop::{instantiate, CanvasOrigin, DropEvent};
pub use id::{now_millis, NodeIdGenerator, TimeIdGenerator};
pub use template::{catalog, DragPayload, DropEffect, NodeTemplate, DRAG_DATA_FORMAT};
