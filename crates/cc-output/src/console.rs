//! Plain-text report for the terminal.

use cc_experiment::ExperimentReport;
use cc_sim::RunResult;

/// `avg_wait=…s, max_queue=…, throughput=…, utilization=…%` for one run.
pub fn render_run_line(result: &RunResult) -> String {
    format!(
        "avg_wait={:.2}s, max_queue={}, throughput={}, utilization={:.1}%",
        result.avg_wait, result.max_queue, result.throughput, result.utilization,
    )
}

/// The full console report: one block per scenario, then the comparison
/// against the baseline.
///
/// ```text
/// Running 3_agents...
///   avg_wait=1.84s, max_queue=9, throughput=1004, utilization=83.6%
///
/// Simple comparison:
///   3_agents avg wait = 1.84s
///   4_agents avg wait = 0.41s (77.7% improvement)
/// ```
pub fn render_console_report(report: &ExperimentReport) -> String {
    let mut out = String::new();

    for run in &report.runs {
        out.push_str(&format!("Running {}...\n", run.scenario.name));
        out.push_str(&format!("  {}\n\n", render_run_line(&run.result)));
    }

    out.push_str("Simple comparison:\n");
    for c in &report.comparisons {
        let line = if c.name == report.baseline {
            format!("  {} avg wait = {:.2}s\n", c.name, c.avg_wait)
        } else {
            format!(
                "  {} avg wait = {:.2}s ({:.1}% improvement)\n",
                c.name, c.avg_wait, c.improvement_pct
            )
        };
        out.push_str(&line);
    }
    out
}
