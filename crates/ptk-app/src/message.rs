//! Message types for the catalog pages (TEA pattern)

use crate::copy_feedback::CopyTarget;

/// User input on the catalog (index) page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexMessage {
    /// Search box contents changed
    QueryChanged(String),
    /// Category selector value changed (`"all"` selects every category)
    CategoryChanged(String),
}

/// Events on a tool's detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMessage {
    /// A copy button was activated
    CopyRequested(CopyTarget),
    /// The clipboard service finished a copy for `target`
    CopyFinished { target: CopyTarget, success: bool },
    /// A scheduled label revert fired
    RevertLabel { target: CopyTarget, generation: u64 },
}

impl DetailMessage {
    /// The copy button this message concerns
    pub fn target(&self) -> CopyTarget {
        match self {
            DetailMessage::CopyRequested(target)
            | DetailMessage::CopyFinished { target, .. }
            | DetailMessage::RevertLabel { target, .. } => *target,
        }
    }
}
