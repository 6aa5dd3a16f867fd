//! Handler module - TEA update functions for the catalog pages
//!
//! Organized into submodules:
//! - `index`: Query and category changes on the catalog view
//! - `detail`: Copy requests, completions and label reverts

pub(crate) mod detail;
pub(crate) mod index;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::copy_feedback::CopyTarget;

pub use detail::update_detail;
pub use index::update_index;

/// Actions the host page should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run the clipboard service on `text`, then send
    /// [`DetailMessage::CopyFinished`](crate::message::DetailMessage::CopyFinished) with the outcome
    Copy { target: CopyTarget, text: String },

    /// Cancel any revert timer pending for `target`, then send
    /// [`DetailMessage::RevertLabel`](crate::message::DetailMessage::RevertLabel) with `generation` after `delay`
    ScheduleRevert {
        target: CopyTarget,
        generation: u64,
        delay: Duration,
    },
}

/// Result of processing a detail message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            action: Some(action),
        }
    }
}
