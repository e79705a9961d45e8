//! Per-scenario results and cross-scenario comparisons.

use serde::{Deserialize, Serialize};

use cc_sim::RunResult;

use crate::Scenario;

/// Percentage reduction of `value` relative to `baseline`.
///
/// Positive means `value` is lower (better, for waits).  Defined as 0 when
/// `baseline` is 0.
pub fn improvement_pct(baseline: f64, value: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (baseline - value) / baseline * 100.0
    }
}

/// One scenario and the record its run produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub result:   RunResult,
}

/// Average wait of one scenario against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub name:            String,
    pub avg_wait:        f64,
    pub improvement_pct: f64,
}

/// Everything an experiment produced, in scenario order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub baseline:    String,
    pub seed:        u64,
    pub runs:        Vec<ScenarioRun>,
    pub comparisons: Vec<Comparison>,
}

impl ExperimentReport {
    /// Assemble the report and derive comparisons against `baseline`.
    ///
    /// If `baseline` names no run its average wait is taken as 0, which
    /// makes every improvement 0.
    pub fn from_runs(baseline: String, seed: u64, runs: Vec<ScenarioRun>) -> Self {
        let base_wait = runs
            .iter()
            .find(|r| r.scenario.name == baseline)
            .map(|r| r.result.avg_wait)
            .unwrap_or(0.0);

        let comparisons = runs
            .iter()
            .map(|r| Comparison {
                name:            r.scenario.name.clone(),
                avg_wait:        r.result.avg_wait,
                improvement_pct: improvement_pct(base_wait, r.result.avg_wait),
            })
            .collect();

        Self { baseline, seed, runs, comparisons }
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioRun> {
        self.runs.iter().find(|r| r.scenario.name == name)
    }

    pub fn baseline_run(&self) -> Option<&ScenarioRun> {
        self.get(&self.baseline)
    }

    pub fn comparison(&self, name: &str) -> Option<&Comparison> {
        self.comparisons.iter().find(|c| c.name == name)
    }

    /// Largest queue length any scenario reached.
    pub fn max_queue_overall(&self) -> usize {
        self.runs.iter().map(|r| r.result.max_queue).max().unwrap_or(0)
    }
}
