//! Virtual-clock timer queue with cancellation tokens.
//!
//! Delayed transitions (pair resolution, reward banner, debounce, search
//! latency) are modelled as events queued on a [`Scheduler`] rather than
//! fire-and-forget timers. Time only moves when the owner calls
//! [`Scheduler::advance_with`], which makes every delay deterministic in
//! tests.
//!
//! ## Ordering
//!
//! Due events fire in deadline order; events sharing a deadline fire in
//! the order they were scheduled. A handler may schedule follow-up events,
//! which are measured from the deadline of the event being handled and
//! fire in the same `advance_with` call if they fall within it.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::Scheduler;
//!
//! let mut timers = Scheduler::new();
//! let keep = timers.schedule(Duration::from_millis(100), "keep");
//! let stale = timers.schedule(Duration::from_millis(50), "stale");
//! assert!(timers.cancel(stale));
//!
//! let mut fired = Vec::new();
//! timers.advance_with(Duration::from_millis(200), |_, timer| fired.push(timer.event));
//! assert_eq!(fired, vec!["keep"]);
//! assert!(!timers.is_pending(keep));
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Cancellation token for a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// An event that came due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<E> {
    /// Token the event was scheduled under.
    pub id: TimerId,
    /// Virtual time the event was due at.
    pub at: Duration,
    /// The scheduled payload.
    pub event: E,
}

/// Timer queue driven by an explicit virtual clock.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), E>,
    deadlines: FxHashMap<TimerId, Duration>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: FxHashMap::default(),
        }
    }
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let at = self.now.saturating_add(delay);
        self.queue.insert((at, id), event);
        self.deadlines.insert(id, at);
        id
    }

    /// Cancel a pending event. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => self.queue.remove(&(at, id)).is_some(),
            None => false,
        }
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Deadline of a pending event.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.deadlines.get(&id).copied()
    }

    /// Number of pending events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    /// Pop the earliest event due at or before `until`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<E>> {
        let (&(at, id), _) = self.queue.first_key_value()?;
        if at > until {
            return None;
        }
        let event = self.queue.remove(&(at, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(at);
        Some(Fired { id, at, event })
    }

    /// Move the clock forward by `elapsed`, handing each due event to
    /// `handler` in order. Returns how many events fired.
    pub fn advance_with<F>(&mut self, elapsed: Duration, mut handler: F) -> usize
    where
        F: FnMut(&mut Self, Fired<E>),
    {
        let until = self.now.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(due) = self.pop_due(until) {
            fired += 1;
            handler(self, due);
        }
        self.now = until;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(300), 3);
        timers.schedule(ms(100), 1);
        timers.schedule(ms(200), 2);

        let mut order = Vec::new();
        let fired = timers.advance_with(ms(1000), |_, t| order.push(t.event));

        assert_eq!(fired, 3);
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(timers.now(), ms(1000));
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_same_deadline_fifo() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(100), 'a');
        timers.schedule(ms(100), 'b');

        let mut order = Vec::new();
        timers.advance_with(ms(100), |_, t| order.push(t.event));
        assert_eq!(order, vec!['a', 'b']);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = Scheduler::new();
        let id = timers.schedule(ms(100), ());

        assert_eq!(timers.advance_with(ms(99), |_, _| {}), 0);
        assert!(timers.is_pending(id));
        assert_eq!(timers.deadline(id), Some(ms(100)));

        assert_eq!(timers.advance_with(ms(1), |_, _| {}), 1);
        assert!(!timers.is_pending(id));
    }

    #[test]
    fn test_cancel() {
        let mut timers = Scheduler::new();
        let id = timers.schedule(ms(10), ());

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.advance_with(ms(20), |_, _| {}), 0);
    }

    #[test]
    fn test_handler_can_chain_events() {
        let mut timers = Scheduler::new();
        timers.schedule(ms(100), "first");

        let mut seen = Vec::new();
        timers.advance_with(ms(250), |timers, t| {
            seen.push((t.event, t.at));
            if t.event == "first" {
                timers.schedule(ms(100), "second");
                timers.schedule(ms(500), "late");
            }
        });

        assert_eq!(seen, vec![("first", ms(100)), ("second", ms(200))]);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_delays_measured_from_now() {
        let mut timers = Scheduler::new();
        timers.advance_with(ms(1000), |_, _: Fired<()>| {});

        let id = timers.schedule(ms(50), ());
        assert_eq!(timers.deadline(id), Some(ms(1050)));
    }

    #[test]
    fn test_clock_saturates_at_max() {
        let mut timers = Scheduler::new();
        timers.advance_with(Duration::MAX, |_, _: Fired<&str>| {});
        assert_eq!(timers.now(), Duration::MAX);

        let id = timers.schedule(ms(1000), "late");
        assert_eq!(timers.deadline(id), Some(Duration::MAX));

        let mut seen = Vec::new();
        assert_eq!(timers.advance_with(ms(1), |_, t| seen.push(t.event)), 1);
        assert_eq!(seen, vec!["late"]);
    }
}
