//! The demo terminal as seen by a host UI.
//!
//! [`DemoSession`] owns every piece of state (selection, the run controller,
//! copy feedback, the intro banner) together with the single timer queue
//! they share. Hosts call the write operations in response to input and
//! [`DemoSession::advance_to`] as time passes, then read the state back to render.

use log::{debug, warn};

use crate::catalog::{DemoCatalog, InstallMethod};
use crate::clipboard::{Clipboard, CopyFeedback};
use crate::config::{Timing, INTRO_TEXT};
use crate::error::{Error, Result};
use crate::file_handling::DemoConfig;
use crate::intro::IntroBanner;
use crate::run_controller::{RunController, RunState};
use crate::scheduler::{Generation, Millis, Timers};
use crate::selection::Selection;

/// Wakeups carried by the session's timer queue, one variant per independent timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    Run(Generation),
    CopyRevert(Generation),
    Intro(Generation),
}

pub struct DemoSession {
    catalog: DemoCatalog,
    timing: Timing,
    selection: Selection,
    run: RunController,
    feedback: CopyFeedback,
    intro: IntroBanner,
    timers: Timers<Wakeup>,
    clipboard: Box<dyn Clipboard>,
}

impl DemoSession {
    /// Opens a session at logical time 0, starting the intro banner if enabled.
    pub fn new(config: DemoConfig, clipboard: Box<dyn Clipboard>) -> Self {
        let DemoConfig { catalog, timing } = config;
        let mut timers = Timers::new();

        let mut intro = IntroBanner::new(INTRO_TEXT, timing.intro_interval_ms);
        if timing.intro_enabled {
            intro.start(&mut timers);
        } else {
            intro.skip(&mut timers);
        }

        Self {
            catalog,
            timing,
            selection: Selection::default(),
            run: RunController::new(timing),
            feedback: CopyFeedback::new(timing.copy_feedback_ms),
            intro,
            timers,
            clipboard,
        }
    }

    pub fn catalog(&self) -> &DemoCatalog {
        &self.catalog
    }

    pub fn install_methods(&self) -> &[InstallMethod] {
        self.catalog.install_methods()
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    /// Typed prefix while a run is in flight, otherwise the selected entry's command.
    pub fn displayed_command(&self) -> &str {
        if self.run.is_running() {
            self.run.typed_prefix()
        } else {
            self.selection.preview(&self.catalog)
        }
    }

    pub fn typed_prefix(&self) -> &str {
        self.run.typed_prefix()
    }

    pub fn revealed_output(&self) -> String {
        self.run.revealed_output()
    }

    pub fn revealed_lines(&self) -> usize {
        self.run.revealed_lines()
    }

    pub fn run_state(&self) -> RunState {
        self.run.state()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    pub fn copied_item(&self) -> Option<usize> {
        self.feedback.active_item()
    }

    pub fn intro_text(&self) -> &str {
        self.intro.text()
    }

    /// Changes the selection. A run in flight keeps playing the entry it captured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] for an index outside the catalog.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.selection.select(index, &self.catalog)
    }

    /// Starts playing the selected entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] while a run is in flight.
    pub fn start(&mut self) -> Result<()> {
        let index = self.selection.index();
        let entry = self
            .catalog
            .get(index)
            .ok_or_else(|| Error::invalid_selection(index, self.catalog.len()))?;

        self.run.start(entry, &mut self.timers)?;
        debug!("Started demo {index} at {}ms", self.timers.now());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.run.reset(&mut self.timers);
    }

    /// Copies install snippet `item_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] for an unknown item, or the clipboard's
    /// error if the write fails.
    pub fn copy(&mut self, item_id: usize) -> Result<()> {
        let Some(method) = self.catalog.install_method(item_id) else {
            let len = self.catalog.install_methods().len();
            warn!("Ignoring copy of unknown install item {item_id}");
            return Err(Error::invalid_selection(item_id, len));
        };

        let text = method.command.clone();
        self.copy_text(&text, item_id)
    }

    /// Copies arbitrary `text`, showing feedback against `item_id`.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error if the write fails; feedback is left unchanged.
    pub fn copy_text(&mut self, text: &str, item_id: usize) -> Result<()> {
        self.feedback
            .copy(text, item_id, self.clipboard.as_mut(), &mut self.timers)
    }

    pub fn skip_intro(&mut self) {
        self.intro.skip(&mut self.timers);
    }

    /// Earliest logical time at which something will change.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Dispatches every wakeup due at or before `now`, in order.
    pub fn advance_to(&mut self, now: Millis) {
        while let Some(wakeup) = self.timers.pop_due(now) {
            match wakeup {
                Wakeup::Run(generation) => self.run.on_wakeup(generation, &mut self.timers),
                Wakeup::CopyRevert(generation) => self.feedback.on_wakeup(generation),
                Wakeup::Intro(generation) => self.intro.on_wakeup(generation, &mut self.timers),
            }
        }
        self.timers.advance_clock(now);
    }

    pub fn advance_by(&mut self, delta: Millis) {
        self.advance_to(self.timers.now().saturating_add(delta));
    }

    /// Runs every timeline to completion and returns the final logical time.
    pub fn settle(&mut self) -> Millis {
        while let Some(deadline) = self.timers.next_due() {
            self.advance_to(deadline);
        }
        self.timers.now()
    }

    /// Cancels everything pending and returns to a blank idle state.
    pub fn shutdown(&mut self) {
        self.run.reset(&mut self.timers);
        self.feedback.clear(&mut self.timers);
        self.intro.stop(&mut self.timers);
        self.timers.clear();
    }
}
