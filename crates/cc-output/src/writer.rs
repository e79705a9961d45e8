//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ComparisonRow, OutputResult, QueueSampleRow, ScenarioSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Driven by [`write_report`][crate::write_report]; backends only need to
/// know how to persist rows.
pub trait OutputWriter {
    /// Write one summary row per scenario (average-wait and max-queue bar
    /// chart data).
    fn write_summaries(&mut self, rows: &[ScenarioSummaryRow]) -> OutputResult<()>;

    /// Write queue-length samples (step-plot data, one row per scenario per
    /// step).
    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()>;

    /// Write the baseline comparison rows.
    fn write_comparisons(&mut self, rows: &[ComparisonRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
