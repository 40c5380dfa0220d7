//! Copy-to-clipboard with a transient "copied" indication.
//!
//! One shared slot holds the item currently showing as copied. A successful
//! copy claims the slot and arms a revert timer; a newer copy supersedes both.

use log::{debug, warn};

use crate::error::Result;
use crate::scheduler::{Generation, Millis, TimerId, Timers};
use crate::session::Wakeup;

/// Host clipboard capability.
///
/// Implementations report failure with [`crate::error::Error::ClipboardUnavailable`].
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub struct CopyFeedback {
    window: Millis,
    generation: Generation,
    active: Option<usize>,
    pending: Option<TimerId>,
}

impl CopyFeedback {
    pub fn new(window: Millis) -> Self {
        Self {
            window,
            generation: Generation::default(),
            active: None,
            pending: None,
        }
    }

    /// Item currently showing the copied indication.
    pub fn active_item(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, item_id: usize) -> bool {
        self.active == Some(item_id)
    }

    /// Writes `text` to `clipboard` and raises feedback for `item_id`.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error unchanged. The feedback slot is left as it was.
    pub fn copy(
        &mut self,
        text: &str,
        item_id: usize,
        clipboard: &mut dyn Clipboard,
        timers: &mut Timers<Wakeup>,
    ) -> Result<()> {
        if let Err(e) = clipboard.write_text(text) {
            warn!("Copy of item {item_id} failed, feedback unchanged");
            return Err(e);
        }

        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }
        if let Some(previous) = self.active {
            if previous != item_id {
                debug!("Copy feedback moved from item {previous} to {item_id}");
            }
        }

        self.generation = self.generation.next();
        self.active = Some(item_id);
        self.pending = Some(timers.schedule(self.window, Wakeup::CopyRevert(self.generation)));
        Ok(())
    }

    pub fn on_wakeup(&mut self, generation: Generation) {
        if generation != self.generation {
            debug!("Ignoring stale copy revert");
            return;
        }

        debug!("Copy feedback for item {:?} expired", self.active);
        self.pending = None;
        self.active = None;
    }

    /// Drops the indication immediately and disarms the revert timer.
    pub fn clear(&mut self, timers: &mut Timers<Wakeup>) {
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }
        self.generation = self.generation.next();
        self.active = None;
    }
}
