//! `cc-experiment`: scenario sets and the runner that compares them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`scenario`] | `Scenario`, `ScenarioSet` (validation, stock 3/4/5-agent set) |
//! | [`loader`]   | `load_scenarios_toml`, `parse_scenarios_toml`               |
//! | [`runner`]   | `ExperimentRunner` (shared-stream and `parallel` modes)     |
//! | [`report`]   | `ExperimentReport`, `ScenarioRun`, `Comparison`, `improvement_pct` |
//! | [`error`]    | `ExperimentError`, `ExperimentResult<T>`                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Adds `ExperimentRunner::run_independent` (Rayon).        |

pub mod error;
pub mod loader;
pub mod report;
pub mod runner;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use error::{ExperimentError, ExperimentResult};
pub use loader::{load_scenarios_toml, parse_scenarios_toml};
pub use report::{Comparison, ExperimentReport, ScenarioRun, improvement_pct};
pub use runner::ExperimentRunner;
pub use scenario::{Scenario, ScenarioSet};
