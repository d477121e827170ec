//! Cooperative timer queue for the single-threaded event loop.
//!
//! Timers are owned through [`TimerLease`] values. Dropping a lease cancels
//! its timer, so a component that is torn down on any path can never receive
//! a tick afterwards. The event loop drives the queue with
//! [`TimerQueue::advance_with`], which fires due timers one at a time and
//! re-checks the queue between fires so cancellations made by a handler take
//! effect immediately.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

/// Identifier of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending {
    interval: Duration,
    due: Duration,
}

#[derive(Debug, Default)]
struct QueueInner {
    next_id: u64,
    now: Duration,
    timers: BTreeMap<TimerId, Pending>,
}

impl QueueInner {
    /// Pop the earliest timer due at or before `deadline`, rescheduling it.
    fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, pending)| pending.due <= deadline)
            .min_by_key(|(id, pending)| (pending.due, **id))
            .map(|(id, pending)| (*id, pending.due))?;

        if let Some(pending) = self.timers.get_mut(&id) {
            pending.due = due + pending.interval;
        }
        self.now = due;
        Some(id)
    }
}

/// Shared handle to the timer queue.
///
/// Cloning is cheap; all clones refer to the same queue.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl TimerQueue {
    /// Create an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a repeating timer firing every `interval`.
    ///
    /// The first fire happens one full interval from now.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero interval.
    pub fn schedule(&self, interval: Duration) -> EngineResult<TimerLease> {
        if interval.is_zero() {
            return Err(EngineError::invalid_argument(
                "timer interval must be positive",
            ));
        }

        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let due = inner.now + interval;
        inner.timers.insert(id, Pending { interval, due });

        Ok(TimerLease {
            id,
            queue: Rc::downgrade(&self.inner),
        })
    }

    /// Advance the clock by `elapsed`, calling `fire` for every due timer in
    /// due order.
    ///
    /// No borrow of the queue is held while `fire` runs, so handlers may
    /// drop or create leases freely.
    pub fn advance_with<F>(&self, elapsed: Duration, mut fire: F)
    where
        F: FnMut(TimerId),
    {
        let deadline = self.inner.borrow().now + elapsed;
        loop {
            let next = self.inner.borrow_mut().pop_due(deadline);
            match next {
                Some(id) => fire(id),
                None => break,
            }
        }
        self.inner.borrow_mut().now = deadline;
    }

    /// Advance the clock by `elapsed` and collect the fired ids.
    pub fn advance(&self, elapsed: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        self.advance_with(elapsed, |id| fired.push(id));
        fired
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Whether `id` is still scheduled.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(&id)
    }
}

/// Ownership of one scheduled timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct TimerLease {
    id: TimerId,
    queue: Weak<RefCell<QueueInner>>,
}

impl TimerLease {
    /// Id reported by the queue when this timer fires.
    pub fn id(&self) -> TimerId {
        self.id
    }
}

impl Drop for TimerLease {
    fn drop(&mut self) {
        if let Some(inner) = self.queue.upgrade() {
            inner.borrow_mut().timers.remove(&self.id);
        }
    }
}
