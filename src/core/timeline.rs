//! Explicit timed transitions.
//!
//! Handlers never call `setTimeout` directly. They schedule events on a
//! [`Timeline`], and whoever owns the clock (the animation-frame loop in the
//! browser, the test in host builds) advances it and receives the events
//! that became due, in due-time order.

use smallvec::SmallVec;

/// Handle for a scheduled event, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Scheduled<E> {
    id: TimerId,
    due_ms: f64,
    event: E,
}

#[derive(Clone, Debug)]
pub struct Timeline<E> {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Schedule `event` to fire `delay_ms` from now. Negative delays fire on the next advance.
    pub fn schedule(&mut self, delay_ms: f64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            event,
        });
        id
    }

    /// Fire on the next advance.
    #[inline]
    pub fn now(&mut self, event: E) -> TimerId {
        self.schedule(0.0, event)
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    #[inline]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_events(&self) -> impl Iterator<Item = &E> {
        self.pending.iter().map(|s| &s.event)
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending.iter().map(|s| s.due_ms).reduce(f64::min)
    }

    /// Move the clock to `now_ms` (never backwards) and return every event
    /// due by then, ordered by due time and then by scheduling order.
    pub fn advance_to(&mut self, now_ms: f64) -> SmallVec<[(TimerId, E); 8]> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now = self.now_ms;
        let mut due: Vec<Scheduled<E>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)));
        due.into_iter().map(|s| (s.id, s.event)).collect()
    }

    #[inline]
    pub fn advance_by(&mut self, dt_ms: f64) -> SmallVec<[(TimerId, E); 8]> {
        let target = self.now_ms + dt_ms;
        self.advance_to(target)
    }
}
