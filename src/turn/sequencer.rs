//! Delayed step scheduling.
//!
//! The match runs on one logical thread. Anything that would "wait a bit"
//! (deal-in animations, attack flight, AI thinking pauses) is a step
//! scheduled on the `Sequencer` with a nominal delay. A `Clock` maps
//! nominal delays to logical time, so tests inject `InstantClock` and
//! every delay collapses to zero without changing step order.
//!
//! ## Ordering
//!
//! Steps run in due-time order; steps due at the same instant run in the
//! order they were scheduled. A step scheduled while another step executes
//! is timed from that step's due time, not from the end of the frame.
//!
//! ## Waiting
//!
//! `wait_until` parks a step until a `WaitCondition` holds. The owner of
//! the sequencer evaluates conditions in `release_waiting`; released steps
//! become due immediately.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::core::Side;

/// Maps nominal presentation delays to logical time.
pub trait Clock: Send + Sync {
    fn scale(&self, nominal: Duration) -> Duration;
}

/// Delays run at their nominal length.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealTimeClock;

impl Clock for RealTimeClock {
    fn scale(&self, nominal: Duration) -> Duration {
        nominal
    }
}

/// Every delay is zero. Used for headless simulation and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn scale(&self, _nominal: Duration) -> Duration {
        Duration::ZERO
    }
}

/// Condition a parked step waits for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitCondition {
    /// Every card in the side's hand is ready.
    HandReady(Side),
}

#[derive(Debug)]
struct Scheduled<S> {
    due: Duration,
    seq: u64,
    step: S,
}

impl<S> PartialEq for Scheduled<S> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<S> Eq for Scheduled<S> {}

impl<S> PartialOrd for Scheduled<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Scheduled<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// Queue of delayed and parked steps over logical time.
pub struct Sequencer<S> {
    clock: Box<dyn Clock>,
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Scheduled<S>>>,
    waiting: Vec<(WaitCondition, S)>,
}

impl<S> Sequencer<S> {
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            now: Duration::ZERO,
            next_seq: 0,
            pending: BinaryHeap::new(),
            waiting: Vec::new(),
        }
    }

    /// Logical time of the step most recently started (or the last
    /// advance, whichever is later).
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `step` to run `delay` (nominal) from now.
    pub fn schedule(&mut self, delay: Duration, step: S) {
        let due = self.now + self.clock.scale(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Scheduled { due, seq, step }));
    }

    /// Park `step` until `condition` holds.
    pub fn wait_until(&mut self, condition: WaitCondition, step: S) {
        self.waiting.push((condition, step));
    }

    /// Move every parked step whose condition holds onto the queue, due now.
    ///
    /// Returns the number of steps released.
    pub fn release_waiting(&mut self, is_met: impl Fn(WaitCondition) -> bool) -> usize {
        let (ready, still_waiting): (Vec<_>, Vec<_>) =
            self.waiting.drain(..).partition(|(condition, _)| is_met(*condition));
        self.waiting = still_waiting;

        let released = ready.len();
        for (_, step) in ready {
            self.schedule(Duration::ZERO, step);
        }
        released
    }

    /// Pop the next step due at or before `horizon`, moving time to it.
    pub fn pop_due(&mut self, horizon: Duration) -> Option<S> {
        let due = self.pending.peek()?.0.due;
        if due > horizon {
            return None;
        }
        self.pop_next()
    }

    /// Pop the next step regardless of when it is due, moving time to it.
    pub fn pop_next(&mut self) -> Option<S> {
        let Reverse(scheduled) = self.pending.pop()?;
        self.now = self.now.max(scheduled.due);
        Some(scheduled.step)
    }

    /// Move time forward without running anything.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Nothing queued and nothing parked.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.waiting.is_empty()
    }
}

impl<S> std::fmt::Debug for Sequencer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .field("waiting", &self.waiting.len())
            .finish()
    }
}
