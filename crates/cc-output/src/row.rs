//! Plain data row types written by output backends.

use cc_experiment::{Comparison, ExperimentReport, ScenarioRun};

/// Headline metrics for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummaryRow {
    pub scenario:            String,
    pub servers:             u64,
    pub arrival_probability: f64,
    pub service_min:         u64,
    pub service_max:         u64,
    pub avg_wait:            f64,
    pub max_queue:           u64,
    pub throughput:          u64,
    pub utilization:         f64,
}

/// Queue length of one scenario at the end of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSampleRow {
    pub scenario:  String,
    pub time:      u64,
    pub queue_len: u64,
}

/// Average wait of one scenario against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub scenario:        String,
    pub baseline:        String,
    pub avg_wait:        f64,
    pub improvement_pct: f64,
}

impl From<&ScenarioRun> for ScenarioSummaryRow {
    fn from(run: &ScenarioRun) -> Self {
        Self {
            scenario:            run.scenario.name.clone(),
            servers:             run.scenario.servers as u64,
            arrival_probability: run.scenario.arrival_probability,
            service_min:         run.scenario.service_time.min,
            service_max:         run.scenario.service_time.max,
            avg_wait:            run.result.avg_wait,
            max_queue:           run.result.max_queue as u64,
            throughput:          run.result.throughput,
            utilization:         run.result.utilization,
        }
    }
}

/// One row per scenario, in report order.
pub fn summary_rows(report: &ExperimentReport) -> Vec<ScenarioSummaryRow> {
    report.runs.iter().map(ScenarioSummaryRow::from).collect()
}

/// Every queue sample of every scenario, grouped by scenario in report order.
pub fn queue_rows(report: &ExperimentReport) -> Vec<QueueSampleRow> {
    report
        .runs
        .iter()
        .flat_map(|run| {
            run.result.queue_time_series.iter().map(move |s| QueueSampleRow {
                scenario:  run.scenario.name.clone(),
                time:      s.time.as_secs(),
                queue_len: s.len as u64,
            })
        })
        .collect()
}

pub fn comparison_rows(report: &ExperimentReport) -> Vec<ComparisonRow> {
    report
        .comparisons
        .iter()
        .map(|c: &Comparison| ComparisonRow {
            scenario:        c.name.clone(),
            baseline:        report.baseline.clone(),
            avg_wait:        c.avg_wait,
            improvement_pct: c.improvement_pct,
        })
        .collect()
}
