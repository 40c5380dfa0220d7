//! Run/idle state machine for one demo playback.
//!
//! A run types the captured entry's command, pauses, then streams its output:
//! `Idle -> Typing -> Processing -> Streaming -> Idle`. Every step is a wakeup
//! on the shared [`Timers`] queue tagged with the run's [`Generation`].

use std::fmt::{Display, Formatter};

use log::{debug, warn};

use crate::catalog::DemoEntry;
use crate::config::Timing;
use crate::error::{Error, Result};
use crate::scheduler::{Generation, TimerId, Timers};
use crate::session::Wakeup;
use crate::streamer::OutputStreamer;
use crate::typing::TypingSimulator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Typing,
    Processing,
    Streaming,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self != RunState::Idle
    }
}

impl Display for RunState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RunState::Idle => "idle",
            RunState::Typing => "typing",
            RunState::Processing => "processing",
            RunState::Streaming => "streaming",
        })
    }
}

pub struct RunController {
    timing: Timing,
    state: RunState,
    generation: Generation,
    pending: Option<TimerId>,
    // Captured by value at start; later selection changes never reach it.
    entry: Option<DemoEntry>,
    typing: Option<TypingSimulator>,
    output: Option<OutputStreamer>,
}

impl RunController {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            state: RunState::Idle,
            generation: Generation::default(),
            pending: None,
            entry: None,
            typing: None,
            output: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Entry being played, if a run is in flight.
    pub fn running_entry(&self) -> Option<&DemoEntry> {
        self.entry.as_ref()
    }

    pub fn typed_prefix(&self) -> &str {
        self.typing
            .as_ref()
            .map(TypingSimulator::prefix)
            .unwrap_or_default()
    }

    /// Whole lines revealed so far. Distinguishes one empty line from none.
    pub fn revealed_lines(&self) -> usize {
        self.output
            .as_ref()
            .map_or(0, OutputStreamer::revealed_lines)
    }

    pub fn revealed_output(&self) -> String {
        self.output
            .as_ref()
            .map(OutputStreamer::revealed_text)
            .unwrap_or_default()
    }

    /// Begins playing `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if a run is in flight; nothing changes in that case.
    pub fn start(&mut self, entry: &DemoEntry, timers: &mut Timers<Wakeup>) -> Result<()> {
        if self.is_running() {
            warn!("Start ignored, already {}", self.state);
            return Err(Error::AlreadyRunning);
        }

        self.generation = self.generation.next();
        self.entry = Some(entry.clone());
        self.typing = Some(TypingSimulator::new(entry.command.as_str()));
        self.output = Some(OutputStreamer::new(&entry.output));

        self.transition(RunState::Typing);
        self.schedule(self.timing.typing_interval_ms, timers);
        Ok(())
    }

    /// Abandons any run and clears both buffers. Valid in every state.
    pub fn reset(&mut self, timers: &mut Timers<Wakeup>) {
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }

        self.generation = self.generation.next();
        self.entry = None;
        self.typing = None;
        self.output = None;

        if self.state != RunState::Idle {
            debug!("Run reset while {}", self.state);
        }
        self.state = RunState::Idle;
    }

    /// Resumes the run after a suspension point.
    pub fn on_wakeup(&mut self, generation: Generation, timers: &mut Timers<Wakeup>) {
        if generation != self.generation {
            debug!("Ignoring stale run wakeup");
            return;
        }
        self.pending = None;

        match self.state {
            RunState::Typing => {
                let typed_more = self.typing.as_mut().is_some_and(TypingSimulator::advance);
                if typed_more {
                    self.schedule(self.timing.typing_interval_ms, timers);
                } else {
                    self.transition(RunState::Processing);
                    self.schedule(self.timing.processing_delay_ms, timers);
                }
            }
            RunState::Processing => {
                self.transition(RunState::Streaming);
                self.schedule(self.timing.line_interval_ms, timers);
            }
            RunState::Streaming => {
                let Some(output) = self.output.as_mut() else {
                    self.transition(RunState::Idle);
                    return;
                };

                output.reveal_next();
                if output.is_complete() {
                    self.entry = None;
                    self.transition(RunState::Idle);
                } else {
                    self.schedule(self.timing.line_interval_ms, timers);
                }
            }
            RunState::Idle => debug!("Run wakeup while idle"),
        }
    }

    fn schedule(&mut self, delay: u64, timers: &mut Timers<Wakeup>) {
        self.pending = Some(timers.schedule(delay, Wakeup::Run(self.generation)));
    }

    fn transition(&mut self, next: RunState) {
        debug!("Run {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_next(controller: &mut RunController, timers: &mut Timers<Wakeup>) -> bool {
        let Some(due) = timers.next_due() else {
            return false;
        };

        while let Some(wakeup) = timers.pop_due(due) {
            if let Wakeup::Run(generation) = wakeup {
                controller.on_wakeup(generation, timers);
            }
        }
        true
    }

    #[test]
    fn test_typing_passes_through_every_prefix() {
        let mut timers = Timers::new();
        let mut controller = RunController::new(Timing::default());
        controller
            .start(&DemoEntry::new("gocat", "ok"), &mut timers)
            .unwrap();

        let mut prefixes = vec![controller.typed_prefix().to_string()];
        while controller.state() == RunState::Typing && fire_next(&mut controller, &mut timers) {
            if controller.state() == RunState::Typing {
                prefixes.push(controller.typed_prefix().to_string());
            }
        }

        assert_eq!(prefixes, vec!["", "g", "go", "goc", "goca", "gocat"]);
        assert_eq!(controller.state(), RunState::Processing);
        // 5 chars + the pause after the full command
        assert_eq!(timers.now(), 6 * 50);
    }

    #[test]
    fn test_phase_sequence() {
        let mut timers = Timers::new();
        let mut controller = RunController::new(Timing::default());
        controller
            .start(&DemoEntry::new("ls", "a\nb"), &mut timers)
            .unwrap();

        let mut states = vec![controller.state()];
        while fire_next(&mut controller, &mut timers) {
            if states.last() != Some(&controller.state()) {
                states.push(controller.state());
            }
        }

        assert_eq!(
            states,
            vec![
                RunState::Typing,
                RunState::Processing,
                RunState::Streaming,
                RunState::Idle
            ]
        );
        assert_eq!(controller.revealed_output(), "a\nb");
        assert_eq!(controller.typed_prefix(), "ls");
        assert!(controller.running_entry().is_none());
        assert_eq!(timers.now(), 3 * 50 + 500 + 2 * 300);
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let mut timers = Timers::new();
        let mut controller = RunController::new(Timing::default());
        controller
            .start(&DemoEntry::new("first", "1"), &mut timers)
            .unwrap();
        fire_next(&mut controller, &mut timers);

        let result = controller.start(&DemoEntry::new("second", "2"), &mut timers);
        assert!(matches!(result, Err(Error::AlreadyRunning)));
        assert_eq!(controller.typed_prefix(), "f");
        assert_eq!(controller.state(), RunState::Typing);
        assert_eq!(controller.running_entry().unwrap().command, "first");
    }

    #[test]
    fn test_reset_cancels_pending_step() {
        let mut timers = Timers::new();
        let mut controller = RunController::new(Timing::default());
        controller
            .start(&DemoEntry::new("abc", "out"), &mut timers)
            .unwrap();
        fire_next(&mut controller, &mut timers);

        controller.reset(&mut timers);
        assert_eq!(controller.state(), RunState::Idle);
        assert_eq!(controller.typed_prefix(), "");
        assert_eq!(controller.revealed_output(), "");
        assert!(timers.is_idle());
    }

    #[test]
    fn test_stale_wakeup_is_ignored() {
        let mut timers = Timers::new();
        let mut controller = RunController::new(Timing::default());
        controller
            .start(&DemoEntry::new("abc", "out"), &mut timers)
            .unwrap();
        let stale = controller.generation;

        controller.reset(&mut timers);
        controller
            .start(&DemoEntry::new("xyz", "out"), &mut timers)
            .unwrap();

        controller.on_wakeup(stale, &mut timers);
        assert_eq!(controller.typed_prefix(), "");
        assert_eq!(controller.state(), RunState::Typing);
    }
}
