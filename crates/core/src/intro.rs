//! Banner that types itself once when a session opens.

use log::debug;

use crate::scheduler::{Generation, Millis, TimerId, Timers};
use crate::session::Wakeup;
use crate::typing::TypingSimulator;

pub struct IntroBanner {
    typing: TypingSimulator,
    interval: Millis,
    generation: Generation,
    pending: Option<TimerId>,
}

impl IntroBanner {
    pub fn new(text: &str, interval: Millis) -> Self {
        Self {
            typing: TypingSimulator::new(text),
            interval,
            generation: Generation::default(),
            pending: None,
        }
    }

    pub fn text(&self) -> &str {
        self.typing.prefix()
    }

    pub fn is_complete(&self) -> bool {
        self.typing.is_complete()
    }

    /// Arms the first character. The banner starts blank.
    pub fn start(&mut self, timers: &mut Timers<Wakeup>) {
        if self.typing.is_complete() || self.pending.is_some() {
            return;
        }
        self.pending = Some(timers.schedule(self.interval, Wakeup::Intro(self.generation)));
    }

    pub fn on_wakeup(&mut self, generation: Generation, timers: &mut Timers<Wakeup>) {
        if generation != self.generation {
            debug!("Ignoring stale intro wakeup");
            return;
        }
        self.pending = None;

        self.typing.advance();
        if !self.typing.is_complete() {
            self.pending = Some(timers.schedule(self.interval, Wakeup::Intro(self.generation)));
        }
    }

    /// Shows the whole banner at once.
    pub fn skip(&mut self, timers: &mut Timers<Wakeup>) {
        self.stop(timers);
        self.typing.finish();
    }

    pub fn stop(&mut self, timers: &mut Timers<Wakeup>) {
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }
        self.generation = self.generation.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until(banner: &mut IntroBanner, timers: &mut Timers<Wakeup>, until: Millis) {
        while let Some(wakeup) = timers.pop_due(until) {
            if let Wakeup::Intro(generation) = wakeup {
                banner.on_wakeup(generation, timers);
            }
        }
        timers.advance_clock(until);
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let mut timers = Timers::new();
        let mut banner = IntroBanner::new("$ go", 100);
        banner.start(&mut timers);
        assert_eq!(banner.text(), "");

        run_until(&mut banner, &mut timers, 100);
        assert_eq!(banner.text(), "$");

        run_until(&mut banner, &mut timers, 250);
        assert_eq!(banner.text(), "$ ");

        run_until(&mut banner, &mut timers, 400);
        assert_eq!(banner.text(), "$ go");
        assert!(banner.is_complete());
        assert!(timers.is_idle());
    }

    #[test]
    fn test_skip_shows_everything() {
        let mut timers = Timers::new();
        let mut banner = IntroBanner::new("$ gocat", 100);
        banner.start(&mut timers);
        run_until(&mut banner, &mut timers, 100);

        banner.skip(&mut timers);
        assert_eq!(banner.text(), "$ gocat");
        assert!(timers.is_idle());
    }

    #[test]
    fn test_stale_wakeup_after_stop() {
        let mut timers = Timers::new();
        let mut banner = IntroBanner::new("abc", 100);
        banner.start(&mut timers);
        let stale = banner.generation;
        banner.stop(&mut timers);

        banner.on_wakeup(stale, &mut timers);
        assert_eq!(banner.text(), "");
    }
}
