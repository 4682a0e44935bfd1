//! One-shot timer bookkeeping
//!
//! A `TimerRegistry` records every deferred action scheduled during a page
//! view so the whole set can be cancelled at once. Actions are plain tagged
//! values rather than closures; whoever fires a timer decides what the
//! action means.
//!
//! The registry keeps its own virtual clock. A real backend (browser
//! timeouts) picks up newly scheduled handles with [`TimerRegistry::take_unarmed`]
//! and calls [`TimerRegistry::fire`] when each one elapses. Tests and the
//! replay CLI skip the backend and drive time with [`TimerRegistry::pop_due`].

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque handle for a scheduled action. Handles are never reused within a
/// registry, so ordering by handle is ordering by schedule time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct PendingTimer<A> {
    due: Duration,
    action: A,
}

/// Outstanding one-shot actions for a single page view.
#[derive(Debug)]
pub struct TimerRegistry<A> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerHandle, PendingTimer<A>>,
    /// Scheduled handles a real backend has not picked up yet
    unarmed: Vec<(TimerHandle, Duration)>,
}

impl<A> Default for TimerRegistry<A> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            unarmed: Vec::new(),
        }
    }
}

impl<A> TimerRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action` to run `delay` from now.
    pub fn schedule(&mut self, action: A, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            handle,
            PendingTimer {
                due: self.now + delay,
                action,
            },
        );
        self.unarmed.push((handle, delay));
        handle
    }

    /// Natural firing: remove the timer from the record and hand back its action.
    ///
    /// Returns `None` for handles that already fired or were cancelled, which
    /// makes a late browser timeout a no-op.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<A> {
        let timer = self.pending.remove(&handle)?;
        self.unarmed.retain(|(h, _)| *h != handle);
        self.now = self.now.max(timer.due);
        Some(timer.action)
    }

    /// Cancel a single timer. Returns false if it was not pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.unarmed.retain(|(h, _)| *h != handle);
        self.pending.remove(&handle).is_some()
    }

    /// Cancel every pending timer and clear the record.
    ///
    /// Returns the cancelled handles so a backend can drop its own timeouts.
    pub fn cancel_all(&mut self) -> Vec<TimerHandle> {
        self.unarmed.clear();
        let handles: Vec<TimerHandle> = self.pending.keys().copied().collect();
        self.pending.clear();
        handles
    }

    /// Newly scheduled timers with their delays, in schedule order.
    pub fn take_unarmed(&mut self) -> Vec<(TimerHandle, Duration)> {
        std::mem::take(&mut self.unarmed)
    }

    /// Fire the earliest timer due at or before `deadline`.
    ///
    /// Ties are broken by schedule order. The clock moves to the timer's due
    /// time, so actions scheduled by the caller in response are relative to it.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TimerHandle, A)> {
        let handle = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(handle, timer)| (timer.due, **handle))
            .map(|(handle, _)| *handle)?;
        let action = self.fire(handle)?;
        Some((handle, action))
    }

    /// Fire everything due within `by` without reacting to it.
    pub fn advance(&mut self, by: Duration) -> Vec<A> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some((_, action)) = self.pop_due(deadline) {
            fired.push(action);
        }
        self.advance_clock(deadline);
        fired
    }

    /// Move the virtual clock forward. Never moves it backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.values().map(|timer| timer.due).min()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fire_removes_timer_before_returning_action() {
        let mut timers = TimerRegistry::new();
        let handle = timers.schedule("header", ms(300));
        assert!(timers.is_pending(handle));

        assert_eq!(timers.fire(handle), Some("header"));
        assert!(!timers.is_pending(handle));
        assert!(timers.is_empty());
        assert_eq!(timers.now(), ms(300));
    }

    #[test]
    fn fire_after_cancel_is_noop() {
        let mut timers = TimerRegistry::new();
        let handle = timers.schedule(1, ms(10));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert_eq!(timers.fire(handle), None);
    }

    #[test]
    fn cancel_all_prevents_every_pending_action() {
        let mut timers = TimerRegistry::new();
        for i in 0..25u64 {
            timers.schedule(i, ms(i * 40));
        }
        let cancelled = timers.cancel_all();
        assert_eq!(cancelled.len(), 25);
        assert!(timers.is_empty());
        assert!(timers.take_unarmed().is_empty());

        let fired = timers.advance(ms(60_000));
        assert!(fired.is_empty());
        for handle in cancelled {
            assert_eq!(timers.fire(handle), None);
        }
    }

    #[test]
    fn cancel_all_leaves_already_fired_actions_alone() {
        let mut timers = TimerRegistry::new();
        timers.schedule("early", ms(10));
        timers.schedule("late", ms(500));

        assert_eq!(timers.advance(ms(100)), vec!["early"]);
        assert_eq!(timers.cancel_all().len(), 1);
        assert!(timers.advance(ms(1000)).is_empty());
    }

    #[test]
    fn pop_due_orders_by_due_time_then_schedule_order() {
        let mut timers = TimerRegistry::new();
        timers.schedule("c", ms(30));
        timers.schedule("a", ms(10));
        timers.schedule("b1", ms(20));
        timers.schedule("b2", ms(20));

        assert_eq!(timers.advance(ms(30)), vec!["a", "b1", "b2", "c"]);
    }

    #[test]
    fn pop_due_respects_deadline() {
        let mut timers = TimerRegistry::new();
        timers.schedule("soon", ms(50));
        timers.schedule("later", ms(150));

        assert!(timers.pop_due(ms(49)).is_none());
        let (_, action) = timers.pop_due(ms(100)).unwrap();
        assert_eq!(action, "soon");
        assert!(timers.pop_due(ms(100)).is_none());
        assert_eq!(timers.next_due(), Some(ms(150)));
    }

    #[test]
    fn schedules_are_relative_to_the_clock() {
        let mut timers = TimerRegistry::new();
        timers.advance(ms(1000));
        timers.schedule("x", ms(250));
        assert_eq!(timers.next_due(), Some(ms(1250)));
    }

    #[test]
    fn take_unarmed_drains_in_schedule_order() {
        let mut timers = TimerRegistry::new();
        let a = timers.schedule('a', ms(5));
        let b = timers.schedule('b', ms(1));

        assert_eq!(timers.take_unarmed(), vec![(a, ms(5)), (b, ms(1))]);
        assert!(timers.take_unarmed().is_empty());
        // Still pending until fired
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn fired_timers_leave_the_unarmed_queue() {
        let mut timers = TimerRegistry::new();
        let a = timers.schedule('a', ms(5));
        timers.fire(a);
        assert!(timers.take_unarmed().is_empty());
    }
}
