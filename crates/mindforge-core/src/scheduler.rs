//! Virtual-clock timer wheel.
//!
//! Timers never run on their own thread. The owner moves the clock forward
//! and pulls due timers one at a time with [`TimerWheel::pop_due`], so a
//! handler that cancels or schedules timers is seen by the very next pop.
//!
//! ```text
//! schedule_repeating / schedule_once -> TimerHandle
//! cancel(handle)                      -> timer never fires again
//! pop_due(deadline)                   -> earliest timer due at or before deadline
//! ```

use serde::Serialize;

/// Identity of a scheduled timer. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerHandle(u64);

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub payload: T,
    /// Virtual time the timer was due at.
    pub at_ms: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TimerHandle,
    due_ms: u64,
    interval_ms: Option<u64>,
    payload: T,
}

/// Single-threaded timer registry over a virtual millisecond clock.
#[derive(Debug, Clone)]
pub struct TimerWheel<T> {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T: Copy> TimerWheel<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire `payload` every `interval_ms`, first one interval from now.
    pub fn schedule_repeating(&mut self, interval_ms: u64, payload: T) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        self.insert(interval_ms, Some(interval_ms), payload)
    }

    /// Fire `payload` once after `delay_ms`.
    pub fn schedule_once(&mut self, delay_ms: u64, payload: T) -> TimerHandle {
        self.insert(delay_ms, None, payload)
    }

    fn insert(&mut self, delay_ms: u64, interval_ms: Option<u64>, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due_ms: self.now_ms.saturating_add(delay_ms),
            interval_ms,
            payload,
        });
        handle
    }

    /// Cancel a timer. Returns false if it was unknown or already done.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Virtual time of the next due timer.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before `deadline_ms`,
    /// moving the clock to its due time. Repeating timers are re-armed one
    /// interval later. Ties resolve in scheduling order.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<Fired<T>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= deadline_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.handle))
            .map(|(i, _)| i)?;

        let entry = &self.entries[idx];
        let fired = Fired {
            handle: entry.handle,
            payload: entry.payload,
            at_ms: entry.due_ms,
        };
        let interval_ms = entry.interval_ms;
        self.now_ms = self.now_ms.max(fired.at_ms);
        match interval_ms {
            Some(interval) => {
                self.entries[idx].due_ms = fired.at_ms.saturating_add(interval);
            }
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }

    /// Move the clock to `deadline_ms` once every due timer has been popped.
    pub fn settle(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }

    /// Advance by `elapsed_ms` and collect everything that fired.
    ///
    /// Suitable when handlers never cancel or schedule timers; otherwise
    /// drive [`TimerWheel::pop_due`] directly.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Fired<T>> {
        let deadline = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(deadline) {
            fired.push(f);
        }
        self.settle(deadline);
        fired
    }
}

impl<T: Copy> Default for TimerWheel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tick {
        Fast,
        Slow,
        Once,
    }

    #[test]
    fn repeating_timer_fires_each_interval() {
        let mut wheel = TimerWheel::new();
        wheel.schedule_repeating(1_000, Tick::Fast);
        assert!(wheel.advance(999).is_empty());
        assert_eq!(wheel.advance(1).len(), 1);
        assert_eq!(wheel.advance(3_000).len(), 3);
        assert_eq!(wheel.now_ms(), 4_000);
    }

    #[test]
    fn fires_in_due_order() {
        let mut wheel = TimerWheel::new();
        wheel.schedule_repeating(1_000, Tick::Fast);
        wheel.schedule_repeating(1_500, Tick::Slow);
        wheel.schedule_once(500, Tick::Once);
        let order: Vec<_> = wheel.advance(2_000).into_iter().map(|f| f.payload).collect();
        assert_eq!(order, vec![Tick::Once, Tick::Fast, Tick::Slow, Tick::Fast]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut wheel = TimerWheel::new();
        let h = wheel.schedule_repeating(1_000, Tick::Fast);
        assert!(wheel.cancel(h));
        assert!(!wheel.cancel(h));
        assert!(wheel.advance(10_000).is_empty());
        assert!(!wheel.is_active(h));
    }

    #[test]
    fn once_timer_is_removed_after_firing() {
        let mut wheel = TimerWheel::new();
        let h = wheel.schedule_once(500, Tick::Once);
        assert_eq!(wheel.advance(500).len(), 1);
        assert!(!wheel.is_active(h));
        assert_eq!(wheel.pending(), 0);
    }

    #[test]
    fn handler_cancellation_is_seen_by_next_pop() {
        let mut wheel = TimerWheel::new();
        let first = wheel.schedule_once(1_000, Tick::Once);
        let second = wheel.schedule_repeating(1_000, Tick::Fast);
        let fired = wheel.pop_due(5_000).unwrap();
        assert_eq!(fired.handle, first);
        wheel.cancel(second);
        assert_eq!(wheel.pop_due(5_000), None);
        wheel.settle(5_000);
        assert_eq!(wheel.now_ms(), 5_000);
    }

    #[test]
    fn scheduling_is_relative_to_current_virtual_time() {
        let mut wheel = TimerWheel::new();
        wheel.advance(2_500);
        wheel.schedule_once(500, Tick::Once);
        assert_eq!(wheel.next_due_ms(), Some(3_000));
    }

    #[test]
    fn handles_are_unique() {
        let mut wheel = TimerWheel::new();
        let a = wheel.schedule_once(1, Tick::Once);
        wheel.cancel(a);
        let b = wheel.schedule_once(1, Tick::Once);
        assert_ne!(a, b);
    }
}
