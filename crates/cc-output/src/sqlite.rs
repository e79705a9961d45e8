//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `scenario_summaries`, `queue_timeseries`, and `comparisons`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ComparisonRow, OutputResult, QueueSampleRow, ScenarioSummaryRow};

/// Writes experiment output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir`, initialise the schema, and clear
    /// rows left by an earlier experiment.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS scenario_summaries (
                 scenario            TEXT PRIMARY KEY,
                 servers             INTEGER NOT NULL,
                 arrival_probability REAL    NOT NULL,
                 service_min         INTEGER NOT NULL,
                 service_max         INTEGER NOT NULL,
                 avg_wait            REAL    NOT NULL,
                 max_queue           INTEGER NOT NULL,
                 throughput          INTEGER NOT NULL,
                 utilization         REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS queue_timeseries (
                 scenario  TEXT    NOT NULL,
                 time      INTEGER NOT NULL,
                 queue_len INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS comparisons (
                 scenario        TEXT PRIMARY KEY,
                 baseline        TEXT NOT NULL,
                 avg_wait        REAL NOT NULL,
                 improvement_pct REAL NOT NULL
             );
             DELETE FROM scenario_summaries;
             DELETE FROM queue_timeseries;
             DELETE FROM comparisons;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_summaries(&mut self, rows: &[ScenarioSummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO scenario_summaries \
                 (scenario, servers, arrival_probability, service_min, service_max, \
                  avg_wait, max_queue, throughput, utilization) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.scenario,
                    row.servers as i64,
                    row.arrival_probability,
                    row.service_min as i64,
                    row.service_max as i64,
                    row.avg_wait,
                    row.max_queue as i64,
                    row.throughput as i64,
                    row.utilization,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_queue_samples(&mut self, rows: &[QueueSampleRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO queue_timeseries (scenario, time, queue_len) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.scenario, row.time as i64, row.queue_len as i64])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_comparisons(&mut self, rows: &[ComparisonRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO comparisons (scenario, baseline, avg_wait, improvement_pct) \
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![row.scenario, row.baseline, row.avg_wait, row.improvement_pct],
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
