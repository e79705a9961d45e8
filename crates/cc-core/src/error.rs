//! Configuration error type.
//!
//! Every variant describes an input the engine refuses to run with.  Sub-crates
//! wrap `ConfigError` as one variant of their own error enums via `From`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("server count must be at least 1")]
    NoServers,

    #[error("arrival probability {0} is outside [0, 1]")]
    ArrivalProbability(f64),

    #[error("service time range is empty: min {min} > max {max}")]
    ServiceTimeRange { min: u64, max: u64 },

    #[error("step width dt must be positive")]
    ZeroStep,

    #[error("total time {total_time} is not a positive multiple of dt {dt}")]
    TotalTime { total_time: u64, dt: u64 },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
