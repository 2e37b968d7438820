//! One-shot deferred actions on a virtual clock.
//!
//! The host drives the clock from its event loop with [`Timers::advance`], so
//! due actions run on the same thread as input and setter calls. Scheduled
//! actions cannot be cancelled; their handlers must tolerate running late.

use std::time::Duration;

#[derive(Debug)]
struct Pending<A> {
    due: Duration,
    seq: u64,
    action: A,
}

#[derive(Debug)]
pub struct Timers<A> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<A> Timers<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `action` once, `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            action,
        });
    }

    /// Move the clock forward and return the actions that became due,
    /// earliest first; ties keep scheduling order.
    pub fn advance(&mut self, dt: Duration) -> Vec<A> {
        self.now += dt;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
