//! Detail page copy handlers

use ptk_core::prelude::*;

use super::{UpdateAction, UpdateResult};
use crate::message::DetailMessage;
use crate::state::DetailState;

/// Process a detail page message
///
/// After every call the host should refresh the label of
/// `message.target()` from [`DetailState::label`].
pub fn update_detail(state: &mut DetailState, message: DetailMessage) -> UpdateResult {
    match message {
        DetailMessage::CopyRequested(target) => {
            let Some(text) = state.copy_text(target).map(str::to_string) else {
                debug!("Ignoring copy request for unknown target {:?}", target);
                return UpdateResult::none();
            };
            if let Some(button) = state.button_mut(target) {
                button.begin();
            }
            UpdateResult::action(UpdateAction::Copy { target, text })
        }

        DetailMessage::CopyFinished { target, success } => {
            let delay = state.feedback.revert_delay();
            let Some(button) = state.button_mut(target) else {
                return UpdateResult::none();
            };
            let generation = button.finish(success);
            UpdateResult::action(UpdateAction::ScheduleRevert {
                target,
                generation,
                delay,
            })
        }

        DetailMessage::RevertLabel { target, generation } => {
            if let Some(button) = state.button_mut(target) {
                if !button.revert(generation) {
                    trace!(
                        "Ignoring stale revert for {:?} (generation {})",
                        target,
                        generation
                    );
                }
            }
            UpdateResult::none()
        }
    }
}
