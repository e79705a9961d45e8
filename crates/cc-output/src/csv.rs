//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `scenario_summaries.csv`
//! - `queue_timeseries.csv`
//! - `comparisons.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ComparisonRow, OutputResult, QueueSampleRow, ScenarioSummaryRow};

pub const SUMMARIES_FILE: &str = "scenario_summaries.csv";
pub const QUEUE_FILE: &str = "queue_timeseries.csv";
pub const COMPARISONS_FILE: &str = "comparisons.csv";

/// Writes experiment output to three CSV files.
pub struct CsvWriter {
    summaries:   Writer<File>,
    queue:       Writer<File>,
    comparisons: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "scenario",
            "servers",
            "arrival_probability",
            "service_min",
            "service_max",
            "avg_wait",
            "max_queue",
            "throughput",
            "utilization",
        ])?;

        let mut queue = Writer::from_path(dir.join(QUEUE_FILE))?;
        queue.write_record(["scenario", "time", "queue_len"])?;

        let mut comparisons = Writer::from_path(dir.join(COMPARISONS_FILE))?;
        comparisons.write_record(["scenario", "baseline", "avg_wait", "improvement_pct"])?;

        Ok(Self {
            summaries,
            queue,
            comparisons,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_summaries(&mut self, rows: &[ScenarioSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.scenario.clone(),
                row.servers.to_string(),
                row.arrival_probability.to_string(),
                row.service_min.to_string(),
                row.service_max.to_string(),
                format!("{:.4}", row.avg_wait),
                row.max_queue.to_string(),
                row.throughput.to_string(),
                format!("{:.4}", row.utilization),
            ])?;
        }
        Ok(())
    }

    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()> {
        for row in rows {
            self.queue.write_record(&[
                row.scenario.clone(),
                row.time.to_string(),
                row.queue_len.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_comparisons(&mut self, rows: &[ComparisonRow]) -> OutputResult<()> {
        for row in rows {
            self.comparisons.write_record(&[
                row.scenario.clone(),
                row.baseline.clone(),
                format!("{:.4}", row.avg_wait),
                format!("{:.4}", row.improvement_pct),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.queue.flush()?;
        self.comparisons.flush()?;
        Ok(())
    }
}
