//! `cc-core`: foundational types for the call-center simulator.
//!
//! This crate is a dependency of every other `cc-*` crate.  It intentionally
//! has no `cc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`time`]   | `SimTime`, `SimClock`                                     |
//! | [`rng`]    | `RandomSource` trait, `SimRng` (seeded stream)            |
//! | [`config`] | `SimConfig`, `ServiceTimeRange`                           |
//! | [`error`]  | `ConfigError`, `ConfigResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ServiceTimeRange, SimConfig};
pub use error::{ConfigError, ConfigResult};
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, SimTime};
