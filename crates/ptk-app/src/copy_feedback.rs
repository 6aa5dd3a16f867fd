//! Copy button feedback state
//!
//! Each copy affordance owns a [`CopyButton`]. Its [`CopyFeedback`] maps to
//! the displayed label through
//! [`FeedbackSettings::label`](crate::config::FeedbackSettings::label).
//! Every copy attempt and every completion advances the button's generation;
//! a scheduled revert only applies if it still carries the current
//! generation, so an older timer can never clobber newer feedback.

/// Which copy affordance on the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// The primary "Copy prompt" button
    Prompt,
    /// The copy button of the adjustment row at this index
    Adjustment(usize),
}

/// Transient feedback shown on a copy button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Copied
        } else {
            Self::Failed
        }
    }
}

/// Feedback state and revert bookkeeping for one button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyButton {
    feedback: CopyFeedback,
    generation: u64,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A copy was requested; any revert scheduled so far becomes stale
    pub fn begin(&mut self) {
        self.generation += 1;
    }

    /// Record the copy outcome; returns the generation a revert must carry
    pub fn finish(&mut self, success: bool) -> u64 {
        self.generation += 1;
        self.feedback = CopyFeedback::from_success(success);
        self.generation
    }

    /// Return to idle if `generation` is current. Returns false for a stale
    /// revert, which leaves the state untouched.
    pub fn revert(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.feedback = CopyFeedback::Idle;
        true
    }
}
