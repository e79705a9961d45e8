//! Servers and waiting calls: the mutable state of one run.

use std::fmt;

use cc_core::SimTime;

// ── CallId ────────────────────────────────────────────────────────────────────

/// Arrival sequence number of a call within one run (0 for the first
/// arrival).  Arrival order is service order, so ids are also assigned to
/// servers in increasing order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallId(pub u64);

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallId({})", self.0)
    }
}

// ── WaitingCall ───────────────────────────────────────────────────────────────

/// A customer that has arrived but not yet been assigned to a server.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingCall {
    pub id:           CallId,
    /// Step time at which the call joined the queue.
    pub arrival_time: SimTime,
}

// ── Server ────────────────────────────────────────────────────────────────────

/// One agent.
///
/// A server is idle iff `remaining_busy_time == 0`.  `total_busy_time` only
/// ever grows, by exactly the amount `remaining_busy_time` shrinks.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Server {
    /// Seconds of service left on the current call.
    pub remaining_busy_time: u64,
    /// Seconds spent serving over the run so far.
    pub total_busy_time:     u64,
}

impl Server {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.remaining_busy_time == 0
    }

    /// Work off up to `dt` seconds of the current call.
    ///
    /// Returns the decrement actually applied (0 for an idle server, less
    /// than `dt` when the call finishes mid-step).
    #[inline]
    pub fn progress(&mut self, dt: u64) -> u64 {
        let applied = self.remaining_busy_time.min(dt);
        self.remaining_busy_time -= applied;
        self.total_busy_time += applied;
        applied
    }

    /// Begin serving a call that takes `service_time` seconds.
    #[inline]
    pub fn start(&mut self, service_time: u64) {
        debug_assert!(self.is_idle(), "start() on a busy server");
        self.remaining_busy_time = service_time;
    }
}
