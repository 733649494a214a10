//! Backend commands queued from UI to backend worker.

use shared::domain::{RollNo, StudentDraft};

pub enum BackendCommand {
    Refresh,
    Create { draft: StudentDraft },
    Update { draft: StudentDraft },
    Delete { roll_no: RollNo },
    Search { roll_no: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Refresh,
    Create,
    Update,
    Delete,
    Search,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
        }
    }

    /// Whether the command submitted the form draft.
    pub fn submits_form(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

impl BackendCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Refresh => CommandKind::Refresh,
            Self::Create { .. } => CommandKind::Create,
            Self::Update { .. } => CommandKind::Update,
            Self::Delete { .. } => CommandKind::Delete,
            Self::Search { .. } => CommandKind::Search,
        }
    }
}
