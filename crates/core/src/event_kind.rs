use std::fmt::Display;

/// GitHub event that triggered the workflow run.
///
/// Only the event name is inspected; payloads are never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A branch or tag was created
    Create,
    Push,
    WorkflowDispatch,
    PullRequest,
    Release,
    /// Any other event name, kept verbatim
    Other(String),
}

impl EventKind {
    /// Events that may publish a snapshot build
    #[must_use]
    pub fn is_snapshot_trigger(&self) -> bool {
        matches!(self, Self::Push | Self::WorkflowDispatch)
    }
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "create" => Self::Create,
            "push" => Self::Push,
            "workflow_dispatch" => Self::WorkflowDispatch,
            "pull_request" => Self::PullRequest,
            "release" => Self::Release,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Create => "create",
                Self::Push => "push",
                Self::WorkflowDispatch => "workflow_dispatch",
                Self::PullRequest => "pull_request",
                Self::Release => "release",
                Self::Other(name) => name,
            }
        )
    }
}
