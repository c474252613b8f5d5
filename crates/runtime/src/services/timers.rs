//! One-shot timers against the world clock.
use std::collections::BTreeMap;
use std::time::Duration;

use pickup_core::{PickupId, TimerHandle, TimerService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTimer {
    owner: PickupId,
    deadline: Duration,
}

/// A timer whose deadline has passed, returned by [`TimerManager::advance_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub owner: PickupId,
    pub deadline: Duration,
}

/// Deferred single-fire callbacks keyed by monotonically increasing handles.
#[derive(Debug, Default)]
pub struct TimerManager {
    now: Duration,
    next: u64,
    pending: BTreeMap<TimerHandle, PendingTimer>,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of a pending timer.
    pub fn deadline(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending.get(&handle).map(|timer| timer.deadline)
    }

    /// Moves the clock to `now` and removes every timer that is due.
    ///
    /// Fired timers are returned in deadline order; timers with the same
    /// deadline fire in the order they were scheduled.
    pub fn advance_to(&mut self, now: Duration) -> Vec<FiredTimer> {
        self.now = self.now.max(now);

        let mut fired: Vec<FiredTimer> = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.deadline <= self.now)
            .map(|(handle, timer)| FiredTimer {
                handle: *handle,
                owner: timer.owner,
                deadline: timer.deadline,
            })
            .collect();
        fired.sort_by_key(|timer| (timer.deadline, timer.handle));

        for timer in &fired {
            self.pending.remove(&timer.handle);
        }
        fired
    }
}

impl TimerService for TimerManager {
    fn schedule_once(&mut self, owner: PickupId, delay: Duration) -> TimerHandle {
        self.next += 1;
        let handle = TimerHandle(self.next);
        let deadline = self.now + delay;
        self.pending.insert(handle, PendingTimer { owner, deadline });
        tracing::trace!("{} scheduled for {} at {:?}", handle, owner, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_deadline_in_order() {
        let mut timers = TimerManager::new();
        let late = timers.schedule_once(PickupId(1), Duration::from_secs(2));
        let early = timers.schedule_once(PickupId(2), Duration::from_secs(1));
        let tie = timers.schedule_once(PickupId(3), Duration::from_secs(2));

        assert!(timers.advance_to(Duration::from_millis(999)).is_empty());

        let fired: Vec<_> = timers
            .advance_to(Duration::from_secs(2))
            .into_iter()
            .map(|t| t.handle)
            .collect();
        assert_eq!(fired, vec![early, late, tie]);
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = TimerManager::new();
        let handle = timers.schedule_once(PickupId(1), Duration::from_secs(1));

        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.advance_to(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn delay_counts_from_schedule_time() {
        let mut timers = TimerManager::new();
        timers.advance_to(Duration::from_secs(10));
        let handle = timers.schedule_once(PickupId(1), Duration::from_secs(4));
        assert_eq!(timers.deadline(handle), Some(Duration::from_secs(14)));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut timers = TimerManager::new();
        let a = timers.schedule_once(PickupId(1), Duration::ZERO);
        timers.advance_to(Duration::ZERO);
        let b = timers.schedule_once(PickupId(1), Duration::ZERO);
        assert_ne!(a, b);
    }
}
