//! User-visible notices ("toasts") with the editor's fixed titles and descriptions.

use crate::error::FlowError;
use crate::persistence::PersistenceError;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: &str, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn flow_saved() -> Self {
        Self::new(
            "Flow saved successfully",
            "Your flow has been saved to local storage.",
            NoticeVariant::Default,
        )
    }

    pub fn flow_loaded() -> Self {
        Self::new(
            "Flow loaded successfully",
            "Your saved flow has been restored.",
            NoticeVariant::Default,
        )
    }

    pub fn node_deleted() -> Self {
        Self::new(
            "Node deleted",
            "The selected node has been removed from the flow.",
            NoticeVariant::Default,
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl From<&FlowError> for Notice {
    fn from(err: &FlowError) -> Self {
        use NoticeVariant::Destructive;
        match err {
            FlowError::PolicyViolation(_) => Notice::new(
                "Connection not allowed",
                "Each node can only have one outgoing connection.",
                Destructive,
            ),
            FlowError::Validation(_) => Notice::new(
                "Cannot save Flow",
                "More than one node has empty target handles. Please connect all nodes properly.",
                Destructive,
            ),
            FlowError::Persistence(PersistenceError::Save(_)) => Notice::new(
                "Cannot save Flow",
                "There was an error saving your flow.",
                Destructive,
            ),
            FlowError::Persistence(PersistenceError::Load(_)) => Notice::new(
                "Cannot load Flow",
                "There was an error loading your saved flow.",
                Destructive,
            ),
            FlowError::Graph(e) => Notice {
                title: "Connection not allowed".to_string(),
                description: e.to_string(),
                variant: Destructive,
            },
            FlowError::Editor(e) => Notice {
                title: "Action unavailable".to_string(),
                description: e.to_string(),
                variant: Destructive,
            },
        }
    }
}
