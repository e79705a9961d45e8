//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of simulated seconds held in a
//! `SimTime`.  The clock advances in fixed-width steps of `dt` seconds:
//!
//!   t = 0, dt, 2·dt, …, total_time − dt
//!
//! Integer time keeps wait-time arithmetic exact and makes runs
//! bit-reproducible for a given random stream.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated time, in seconds since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Seconds elapsed from `earlier` to `self`, or `None` if `earlier` is
    /// later than `self`.
    #[inline]
    pub fn checked_since(self, earlier: SimTime) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The step counter driving one run.
///
/// Created at run start from the validated configuration and discarded with
/// the run state; it never outlives a single engine invocation.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Seconds per step.
    pub dt: u64,
    /// Exclusive upper bound of the run, in seconds.
    pub total_time: u64,
    /// The current step time, advanced by `dt` after each step.
    pub now: SimTime,
    /// Number of steps completed so far.
    pub steps_done: u64,
}

impl SimClock {
    pub fn new(dt: u64, total_time: u64) -> Self {
        Self {
            dt,
            total_time,
            now: SimTime::ZERO,
            steps_done: 0,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.now = self.now + self.dt;
        self.steps_done += 1;
    }

    /// `true` once `now` has reached `total_time`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.now.0 >= self.total_time
    }

    /// Total number of steps in the run (`total_time / dt`).
    #[inline]
    pub fn total_steps(&self) -> u64 {
        if self.dt == 0 { 0 } else { self.total_time / self.dt }
    }

    /// Steps left before the clock finishes.
    #[inline]
    pub fn remaining_steps(&self) -> u64 {
        self.total_steps().saturating_sub(self.steps_done)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (step {}/{})",
            self.now,
            self.steps_done,
            self.total_steps()
        )
    }
}
