use core::fmt;
use std::time::Duration;

use crate::pickup::PickupId;

/// Owned handle to a pending one-shot timer.
///
/// Handles are never reused by a timer service, so a stale handle can be
/// compared against the pending one to discard late callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One-shot deferred callbacks against the host clock.
///
/// When a timer fires the host calls back into the owning pickup with the
/// handle returned here.
pub trait TimerService {
    fn schedule_once(&mut self, owner: PickupId, delay: Duration) -> TimerHandle;

    /// Cancels a pending timer. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
