//! `write_report` drives any [`OutputWriter`] from an experiment report.

use cc_experiment::ExperimentReport;
use tracing::debug;

use crate::row::{comparison_rows, queue_rows, summary_rows};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write summaries, queue samples, and comparisons, then finish the writer.
///
/// Stops at the first backend error; the writer is not finished in that
/// case.
pub fn write_report<W: OutputWriter + ?Sized>(
    writer: &mut W,
    report: &ExperimentReport,
) -> OutputResult<()> {
    let summaries = summary_rows(report);
    let samples = queue_rows(report);
    let comparisons = comparison_rows(report);

    writer.write_summaries(&summaries)?;
    writer.write_queue_samples(&samples)?;
    writer.write_comparisons(&comparisons)?;
    writer.finish()?;

    debug!(
        "wrote {} summaries, {} queue samples, {} comparisons",
        summaries.len(),
        samples.len(),
        comparisons.len()
    );
    Ok(())
}
