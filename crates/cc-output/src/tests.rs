//! Integration tests for cc-output.

use cc_core::SimTime;
use cc_experiment::{ExperimentReport, Scenario, ScenarioRun};
use cc_sim::{QueueSample, RunResult};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(name: &str, servers: usize, avg_wait: f64, max_queue: usize, lens: &[usize]) -> ScenarioRun {
    ScenarioRun {
        scenario: Scenario::new(name, servers, 0.5, (3, 7)),
        result:   RunResult {
            avg_wait,
            max_queue,
            throughput: 10 + servers as u64 - 3,
            utilization: 80.0 - 20.0 * (servers as f64 - 3.0),
            queue_time_series: lens
                .iter()
                .enumerate()
                .map(|(t, &len)| QueueSample { time: SimTime(t as u64), len })
                .collect(),
            wait_times: vec![],
            server_busy_time: vec![0; servers],
            calls_arrived: 0,
            calls_waiting: 0,
        },
    }
}

/// Two scenarios; the second halves the queue and cuts the wait by 75 %.
fn sample_report() -> ExperimentReport {
    ExperimentReport::from_runs(
        "3_agents".to_owned(),
        42,
        vec![
            run("3_agents", 3, 2.0, 3, &[1, 3, 2]),
            run("4_agents", 4, 0.5, 1, &[0, 1, 0]),
        ],
    )
}

// ── Console ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::{render_console_report, render_run_line};

    #[test]
    fn run_line_format() {
        let r = run("3_agents", 3, 1.234, 7, &[]);
        assert_eq!(
            render_run_line(&r.result),
            "avg_wait=1.23s, max_queue=7, throughput=10, utilization=80.0%"
        );
    }

    #[test]
    fn full_report_text() {
        let expected = "\
Running 3_agents...
  avg_wait=2.00s, max_queue=3, throughput=10, utilization=80.0%

Running 4_agents...
  avg_wait=0.50s, max_queue=1, throughput=11, utilization=60.0%

Simple comparison:
  3_agents avg wait = 2.00s
  4_agents avg wait = 0.50s (75.0% improvement)
";
        assert_eq!(render_console_report(&sample_report()), expected);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{COMPARISONS_FILE, CsvWriter, QUEUE_FILE, SUMMARIES_FILE};
    use crate::writer::OutputWriter;
    use crate::write_report;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<::csv::StringRecord> {
        let mut rdr = ::csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = ::csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SUMMARIES_FILE).exists());
        assert!(dir.path().join(QUEUE_FILE).exists());
        assert!(dir.path().join(COMPARISONS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, SUMMARIES_FILE),
            [
                "scenario",
                "servers",
                "arrival_probability",
                "service_min",
                "service_max",
                "avg_wait",
                "max_queue",
                "throughput",
                "utilization",
            ]
        );
        assert_eq!(headers(&dir, QUEUE_FILE), ["scenario", "time", "queue_len"]);
        assert_eq!(
            headers(&dir, COMPARISONS_FILE),
            ["scenario", "baseline", "avg_wait", "improvement_pct"]
        );
    }

    #[test]
    fn report_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_report(&mut w, &sample_report()).unwrap();

        let summaries = records(&dir, SUMMARIES_FILE);
        assert_eq!(summaries.len(), 2);
        assert_eq!(&summaries[0][0], "3_agents");
        assert_eq!(&summaries[0][1], "3");
        assert_eq!(&summaries[0][5], "2.0000"); // avg_wait
        assert_eq!(&summaries[1][6], "1");      // max_queue

        let queue = records(&dir, QUEUE_FILE);
        assert_eq!(queue.len(), 6);
        assert_eq!((&queue[1][0], &queue[1][1], &queue[1][2]), ("3_agents", "1", "3"));
        assert_eq!(&queue[3][0], "4_agents");

        let comparisons = records(&dir, COMPARISONS_FILE);
        assert_eq!(comparisons.len(), 2);
        assert_eq!(&comparisons[0][3], "0.0000");
        assert_eq!(&comparisons[1][1], "3_agents");
        assert_eq!(&comparisons[1][3], "75.0000");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summaries(&[]).unwrap();
        w.write_queue_samples(&[]).unwrap();
        w.write_comparisons(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }

    #[test]
    fn integration_csv() {
        use cc_experiment::{ExperimentRunner, ScenarioSet};

        let set = ScenarioSet::call_center_default().with_timing(100, 1);
        let report = ExperimentRunner::new(set).unwrap().run_seeded().unwrap();

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_report(&mut w, &report).unwrap();

        assert_eq!(records(&dir, SUMMARIES_FILE).len(), 3);
        assert_eq!(records(&dir, QUEUE_FILE).len(), 3 * 100);
        assert_eq!(records(&dir, COMPARISONS_FILE).len(), 3);
    }
}

// ── Row building and writer driving ───────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::row::{comparison_rows, queue_rows, summary_rows};
    use crate::{
        ComparisonRow, OutputError, OutputResult, OutputWriter, QueueSampleRow, ScenarioSummaryRow,
        write_report,
    };

    #[test]
    fn rows_follow_report_order() {
        let report = sample_report();
        let names: Vec<String> = summary_rows(&report).into_iter().map(|r| r.scenario).collect();
        assert_eq!(names, ["3_agents", "4_agents"]);

        let q = queue_rows(&report);
        let lens: Vec<u64> = q.iter().map(|r| r.queue_len).collect();
        assert_eq!(lens, [1, 3, 2, 0, 1, 0]);

        let c = comparison_rows(&report);
        assert!(c.iter().all(|r| r.baseline == "3_agents"));
        assert_eq!(c[1].improvement_pct, 75.0);
    }

    /// Fails on queue samples; records which calls it received.
    #[derive(Default)]
    struct FailingWriter {
        calls: Vec<&'static str>,
    }

    impl OutputWriter for FailingWriter {
        fn write_summaries(&mut self, _rows: &[ScenarioSummaryRow]) -> OutputResult<()> {
            self.calls.push("summaries");
            Ok(())
        }
        fn write_queue_samples(&mut self, _rows: &[QueueSampleRow]) -> OutputResult<()> {
            self.calls.push("queue");
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_comparisons(&mut self, _rows: &[ComparisonRow]) -> OutputResult<()> {
            self.calls.push("comparisons");
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.calls.push("finish");
            Ok(())
        }
    }

    #[test]
    fn first_backend_error_stops_the_write() {
        let mut w = FailingWriter::default();
        let err = write_report(&mut w, &sample_report()).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(w.calls, ["summaries", "queue"]);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;
    use crate::write_report;

    fn count(conn: &rusqlite::Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn sqlite_tables_filled() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        write_report(&mut w, &sample_report()).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        assert_eq!(count(&conn, "scenario_summaries"), 2);
        assert_eq!(count(&conn, "queue_timeseries"), 6);
        assert_eq!(count(&conn, "comparisons"), 2);

        let pct: f64 = conn
            .query_row(
                "SELECT improvement_pct FROM comparisons WHERE scenario = '4_agents'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(pct, 75.0);
    }

    #[test]
    fn sqlite_rewrite_same_dir_replaces_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        for _ in 0..2 {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            write_report(&mut w, &sample_report()).unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        assert_eq!(count(&conn, "scenario_summaries"), 2);
        assert_eq!(count(&conn, "queue_timeseries"), 6);
        assert_eq!(count(&conn, "comparisons"), 2);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
