//! Clipboard service: asynchronous primary write with a legacy fallback
//!
//! Hosts supply two backends:
//! - a [`LocalClipboard`] (or `Send` [`Clipboard`]) for the platform's
//!   asynchronous clipboard capability
//! - a [`LegacyCopy`] for the synchronous copy mechanism used when the
//!   primary path fails, is unsupported, or is denied
//!
//! [`ClipboardService::copy`] always resolves to a plain `bool`. Failures
//! never escape as errors; they become "copy failed" feedback.

use ptk_core::prelude::*;

/// Asynchronous platform clipboard
#[trait_variant::make(Clipboard: Send)]
pub trait LocalClipboard {
    /// Write `text` to the system clipboard
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Synchronous fallback copy mechanism
pub trait LegacyCopy {
    /// Copy `text`, reporting the mechanism's own success flag
    fn copy(&self, text: &str) -> bool;
}

/// Primary backend for platforms with no asynchronous clipboard
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl LocalClipboard for Unsupported {
    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::ClipboardUnavailable)
    }
}

/// Copies text through the primary backend, falling back on failure
#[derive(Debug, Clone, Default)]
pub struct ClipboardService<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> ClipboardService<P, F>
where
    P: LocalClipboard,
    F: LegacyCopy,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Copy `text`; true when either path reports success
    pub async fn copy(&self, text: &str) -> bool {
        match self.primary.write_text(text).await {
            Ok(()) => {
                debug!("Copied {} bytes through primary clipboard", text.len());
                true
            }
            Err(e) => {
                warn!("Primary clipboard write failed ({}), using fallback", e);
                let ok = self.fallback.copy(text);
                if ok {
                    debug!("Fallback copy succeeded");
                } else {
                    warn!("Fallback copy failed");
                }
                ok
            }
        }
    }
}
