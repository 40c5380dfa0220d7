//! Logical timer queue driving every delay in the demo engine.
//!
//! All suspension points (typing steps, the processing delay, line reveals and
//! copy-feedback reverts) are wakeups in one [`Timers`] queue. Nothing sleeps:
//! the host advances the logical clock and dispatches whatever became due.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use log::trace;

/// Milliseconds on the logical clock.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Epoch token stamped onto wakeups.
///
/// A component bumps its generation whenever it abandons pending work, and
/// ignores any wakeup carrying an older one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

struct Pending<E> {
    due: Millis,
    id: TimerId,
    event: E,
}

// Ordered by (due, id) only; ids are handed out in scheduling order so ties fire FIFO.
impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.id.0).cmp(&(other.due, other.id.0))
    }
}

pub struct Timers<E> {
    now: Millis,
    next_id: u64,
    queue: BinaryHeap<Reverse<Pending<E>>>,
    cancelled: HashSet<TimerId>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedules `event` to fire `delay` milliseconds from the current logical time.
    pub fn schedule(&mut self, delay: Millis, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due = self.now.saturating_add(delay);
        trace!("Scheduled timer {:?} at {due}ms", id);
        self.queue.push(Reverse(Pending { due, id, event }));

        id
    }

    /// Prevents a pending timer from firing. Unknown or already fired ids are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        if self.queue.iter().any(|Reverse(pending)| pending.id == id) {
            self.cancelled.insert(id);
        }
    }

    pub fn is_idle(&self) -> bool {
        self.next_due().is_none()
    }

    /// Earliest due time among live timers.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue
            .iter()
            .filter(|Reverse(pending)| !self.cancelled.contains(&pending.id))
            .map(|Reverse(pending)| pending.due)
            .min()
    }

    /// Pops the next live wakeup due at or before `until`.
    ///
    /// The clock moves to the wakeup's due time so anything scheduled while
    /// handling it is measured from that instant.
    pub fn pop_due(&mut self, until: Millis) -> Option<E> {
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.due > until {
                return None;
            }

            let Some(Reverse(pending)) = self.queue.pop() else {
                return None;
            };

            if self.cancelled.remove(&pending.id) {
                trace!("Dropped cancelled timer {:?}", pending.id);
                continue;
            }

            self.now = self.now.max(pending.due);
            return Some(pending.event);
        }

        None
    }

    /// Moves the clock forward to `until`. The clock never runs backwards.
    pub fn advance_clock(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cancelled.clear();
    }
}
