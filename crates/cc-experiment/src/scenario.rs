//! Named scenarios and the experiment-wide settings they share.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cc_core::{ServiceTimeRange, SimConfig};
use cc_sim::SimError;

use crate::{ExperimentError, ExperimentResult};

/// One configuration to compare: how many servers, how busy the line is, and
/// how long calls take.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name:                String,
    pub servers:             usize,
    pub arrival_probability: f64,
    pub service_time:        ServiceTimeRange,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        servers: usize,
        arrival_probability: f64,
        service_time: impl Into<ServiceTimeRange>,
    ) -> Self {
        Self {
            name: name.into(),
            servers,
            arrival_probability,
            service_time: service_time.into(),
        }
    }
}

/// An ordered set of scenarios run back to back on one random stream.
///
/// Order matters twice: it is the order results are reported in, and (since
/// all scenarios draw from the same stream) it decides which draws each
/// scenario sees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Simulated seconds per run.
    pub total_time: u64,
    /// Seconds per step.
    pub dt:         u64,
    /// Seed for the shared stream.
    pub seed:       u64,
    /// Name of the scenario improvements are measured against.
    pub baseline:   String,
    pub scenarios:  Vec<Scenario>,
}

impl ScenarioSet {
    pub const DEFAULT_SEED: u64 = 42;

    /// Build a set with the default timing and seed; the first scenario is
    /// the baseline.
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        let baseline = scenarios.first().map(|s| s.name.clone()).unwrap_or_default();
        Self {
            total_time: SimConfig::DEFAULT_TOTAL_TIME,
            dt:         SimConfig::DEFAULT_DT,
            seed:       Self::DEFAULT_SEED,
            baseline,
            scenarios,
        }
    }

    /// The stock staffing comparison: 3, 4, and 5 agents, a call every other
    /// second on average, 3–7 s per call, 3 agents as the baseline.
    pub fn call_center_default() -> Self {
        Self::new(vec![
            Scenario::new("3_agents", 3, 0.5, (3, 7)),
            Scenario::new("4_agents", 4, 0.5, (3, 7)),
            Scenario::new("5_agents", 5, 0.5, (3, 7)),
        ])
    }

    pub fn with_timing(mut self, total_time: u64, dt: u64) -> Self {
        self.total_time = total_time;
        self.dt = dt;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_baseline(mut self, name: impl Into<String>) -> Self {
        self.baseline = name.into();
        self
    }

    /// Engine configuration for one scenario of this set.
    pub fn config_for(&self, scenario: &Scenario) -> SimConfig {
        SimConfig {
            num_servers:         scenario.servers,
            arrival_probability: scenario.arrival_probability,
            service_time:        scenario.service_time,
            total_time:          self.total_time,
            dt:                  self.dt,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Check the set and every scenario's engine configuration.
    ///
    /// Nothing runs until the whole set passes, so an experiment never
    /// returns results for some scenarios and an error for others.
    pub fn validate(&self) -> ExperimentResult<()> {
        if self.scenarios.is_empty() {
            return Err(ExperimentError::NoScenarios);
        }

        let mut seen = HashSet::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            if !seen.insert(scenario.name.as_str()) {
                return Err(ExperimentError::DuplicateScenario(scenario.name.clone()));
            }
            self.config_for(scenario)
                .validate()
                .map_err(|e| ExperimentError::Scenario {
                    name:   scenario.name.clone(),
                    source: SimError::from(e),
                })?;
        }

        if !seen.contains(self.baseline.as_str()) {
            return Err(ExperimentError::UnknownBaseline(self.baseline.clone()));
        }
        Ok(())
    }
}
