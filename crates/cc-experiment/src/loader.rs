//! TOML scenario loader.
//!
//! # File format
//!
//! ```toml
//! total_time = 2000        # optional, default 2000
//! dt         = 1           # optional, default 1
//! seed       = 42          # optional, default 42
//! baseline   = "3_agents"  # optional, default: first scenario
//!
//! [[scenario]]
//! name                = "3_agents"
//! servers             = 3
//! arrival_probability = 0.5
//! service_time        = [3, 7]
//!
//! [[scenario]]
//! name                = "4_agents"
//! servers             = 4
//! arrival_probability = 0.5
//! service_time        = [3, 7]
//! ```
//!
//! Scenarios keep file order.  The loaded set is validated before it is
//! returned.

use std::path::Path;

use serde::Deserialize;

use cc_core::{ServiceTimeRange, SimConfig};

use crate::{ExperimentResult, Scenario, ScenarioSet};

// ── TOML records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    total_time: Option<u64>,
    dt:         Option<u64>,
    seed:       Option<u64>,
    baseline:   Option<String>,
    #[serde(default, rename = "scenario")]
    scenarios:  Vec<ScenarioRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRecord {
    name:                String,
    servers:             usize,
    arrival_probability: f64,
    service_time:        [u64; 2],
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a scenario set from a TOML file.
pub fn load_scenarios_toml(path: &Path) -> ExperimentResult<ScenarioSet> {
    let text = std::fs::read_to_string(path)?;
    parse_scenarios_toml(&text)
}

/// Like [`load_scenarios_toml`] but parses an in-memory string.
pub fn parse_scenarios_toml(text: &str) -> ExperimentResult<ScenarioSet> {
    let file: ScenarioFile = toml::from_str(text)?;

    let scenarios: Vec<Scenario> = file
        .scenarios
        .into_iter()
        .map(|r| Scenario {
            name:                r.name,
            servers:             r.servers,
            arrival_probability: r.arrival_probability,
            service_time:        ServiceTimeRange::new(r.service_time[0], r.service_time[1]),
        })
        .collect();

    let mut set = ScenarioSet::new(scenarios).with_timing(
        file.total_time.unwrap_or(SimConfig::DEFAULT_TOTAL_TIME),
        file.dt.unwrap_or(SimConfig::DEFAULT_DT),
    );
    if let Some(seed) = file.seed {
        set = set.with_seed(seed);
    }
    if let Some(baseline) = file.baseline {
        set = set.with_baseline(baseline);
    }

    set.validate()?;
    Ok(set)
}
