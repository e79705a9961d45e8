//! Run configuration.

use std::fmt;

use crate::{ConfigError, ConfigResult, SimClock};

// ── ServiceTimeRange ──────────────────────────────────────────────────────────

/// Inclusive range of service durations, in seconds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceTimeRange {
    pub min: u64,
    pub max: u64,
}

impl ServiceTimeRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// A range that always yields `secs`.
    pub const fn fixed(secs: u64) -> Self {
        Self { min: secs, max: secs }
    }
}

impl From<(u64, u64)> for ServiceTimeRange {
    fn from((min, max): (u64, u64)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for ServiceTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}s", self.min, self.max)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Configuration for one engine run.
///
/// Typically built by the experiment runner from a named scenario plus the
/// experiment-wide `total_time` and `dt`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of servers (agents).  Must be at least 1.
    pub num_servers: usize,

    /// Probability that one call arrives in a step.  Must lie in `[0, 1]`.
    pub arrival_probability: f64,

    /// Inclusive range service durations are drawn from.
    pub service_time: ServiceTimeRange,

    /// Simulated seconds to run (exclusive upper bound of `t`).
    pub total_time: u64,

    /// Seconds per step.  Must divide `total_time` evenly.
    pub dt: u64,
}

impl SimConfig {
    pub const DEFAULT_TOTAL_TIME: u64 = 2_000;
    pub const DEFAULT_DT: u64 = 1;

    /// Configuration with the default run length (2000 s at 1 s per step).
    pub fn new(
        num_servers: usize,
        arrival_probability: f64,
        service_time: impl Into<ServiceTimeRange>,
    ) -> Self {
        Self {
            num_servers,
            arrival_probability,
            service_time: service_time.into(),
            total_time: Self::DEFAULT_TOTAL_TIME,
            dt: Self::DEFAULT_DT,
        }
    }

    /// Override the run length and step width.
    pub fn with_timing(mut self, total_time: u64, dt: u64) -> Self {
        self.total_time = total_time;
        self.dt = dt;
        self
    }

    /// Check every precondition of a run.  The first violation found is
    /// returned.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_servers == 0 {
            return Err(ConfigError::NoServers);
        }
        // Written so that NaN fails the check.
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(ConfigError::ArrivalProbability(self.arrival_probability));
        }
        if self.service_time.min > self.service_time.max {
            return Err(ConfigError::ServiceTimeRange {
                min: self.service_time.min,
                max: self.service_time.max,
            });
        }
        if self.dt == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.total_time == 0 || self.total_time % self.dt != 0 {
            return Err(ConfigError::TotalTime {
                total_time: self.total_time,
                dt: self.dt,
            });
        }
        Ok(())
    }

    /// Number of steps in a run (`total_time / dt`).
    #[inline]
    pub fn total_steps(&self) -> u64 {
        if self.dt == 0 { 0 } else { self.total_time / self.dt }
    }

    /// Total server-seconds available over the run.
    #[inline]
    pub fn capacity_secs(&self) -> u64 {
        self.num_servers as u64 * self.total_time
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt, self.total_time)
    }
}
