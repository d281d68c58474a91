//! Timer-reset debounce.
//!
//! Repeated calls inside the quiet window collapse into one invocation
//! carrying the arguments of the last call. Each call cancels the pending
//! timer and schedules a fresh one a full window later.
//!
//! Two layers:
//!
//! - [`Debouncer`] only tracks the pending [`TimerId`]; the owner supplies
//!   the [`Scheduler`] and handles the fired event. Used when the debounced
//!   event shares a timer queue with other events (see `search`).
//! - [`Debounced`] wraps a callback and owns its own scheduler.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::debounce::Debounced;
//!
//! let mut last = None;
//! let mut typed = Debounced::new(Duration::from_millis(300), |q: String| last = Some(q));
//! typed.call("b".to_string());
//! typed.advance(Duration::from_millis(100));
//! typed.call("be".to_string());
//! typed.advance(Duration::from_millis(300));
//! drop(typed);
//! assert_eq!(last.as_deref(), Some("be"));
//! ```

use std::time::Duration;

use crate::schedule::{Scheduler, TimerId};

/// Pending-timer bookkeeping for a debounced event.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// The quiet window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Cancel any pending event and schedule `event` one window from now.
    pub fn call<E>(&mut self, timers: &mut Scheduler<E>, event: E) -> TimerId {
        if let Some(previous) = self.pending.take() {
            timers.cancel(previous);
        }
        let id = timers.schedule(self.window, event);
        self.pending = Some(id);
        id
    }

    /// Tell the debouncer an event fired. Returns `true` if it was the
    /// pending debounced event.
    pub fn fired(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending event, if any.
    pub fn cancel<E>(&mut self, timers: &mut Scheduler<E>) -> bool {
        match self.pending.take() {
            Some(id) => timers.cancel(id),
            None => false,
        }
    }

    /// Token of the pending event.
    #[must_use]
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}

/// A callback wrapped in a debounce with its own virtual clock.
pub struct Debounced<A, F>
where
    F: FnMut(A),
{
    debouncer: Debouncer,
    timers: Scheduler<A>,
    callback: F,
}

impl<A, F> Debounced<A, F>
where
    F: FnMut(A),
{
    /// Wrap `callback` with a `window` debounce.
    pub fn new(window: Duration, callback: F) -> Self {
        Self {
            debouncer: Debouncer::new(window),
            timers: Scheduler::new(),
            callback,
        }
    }

    /// Request an invocation with `args`, replacing any pending one.
    pub fn call(&mut self, args: A) {
        self.debouncer.call(&mut self.timers, args);
    }

    /// Advance the clock, invoking the callback if the window elapsed.
    /// Returns the number of invocations.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let debouncer = &mut self.debouncer;
        let callback = &mut self.callback;
        self.timers.advance_with(elapsed, |_, due| {
            debouncer.fired(due.id);
            callback(due.event);
        })
    }

    /// Drop the pending invocation.
    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel(&mut self.timers)
    }

    /// Whether an invocation is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.pending().is_some()
    }

    /// When the pending invocation will fire.
    #[must_use]
    pub fn due_at(&self) -> Option<Duration> {
        self.debouncer.pending().and_then(|id| self.timers.deadline(id))
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }
}

impl<A, F> std::fmt::Debug for Debounced<A, F>
where
    F: FnMut(A),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("debouncer", &self.debouncer)
            .field("now", &self.timers.now())
            .finish_non_exhaustive()
    }
}
