use chatflow::CanvasOrigin;

/// One thing a run does after mounting the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Print the graph (text, or JSON with `json`).
    Show { json: bool },
    /// Drop `template` at viewport position (`x`, `y`) over a canvas at `origin`, then
    /// connect `after` to the new node if given.
    Add {
        x: f64,
        y: f64,
        origin: CanvasOrigin,
        template: String,
        after: Option<String>,
    },
    Connect { source: String, target: String },
    Disconnect { edge_id: String },
    /// Select `id`, edit the given fields in the settings editor, commit.
    Edit {
        id: String,
        label: Option<String>,
        message: Option<String>,
    },
    /// Select `id` and delete it from the settings editor.
    Delete { id: String },
    Move { id: String, x: f64, y: f64 },
    /// Run the save check without writing.
    Validate,
    /// Line-oriented command script; see [`parse_script`](super::parse_script).
    Script { source: String },
}

impl Action {
    /// True for one-shot commands that save after applying.
    pub fn saves(&self) -> bool {
        !matches!(
            self,
            Action::Show { .. } | Action::Validate | Action::Script { .. }
        )
    }
}
