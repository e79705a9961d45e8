//! `cc-output`: reporting for call-center experiments.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                     |
//! |-----------|---------|-------------------------------------------------------------------|
//! | *(none)*  | CSV     | `scenario_summaries.csv`, `queue_timeseries.csv`, `comparisons.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                       |
//!
//! Both implement [`OutputWriter`] and are driven by [`write_report`].  The
//! tables are the chart data: average wait and max queue per scenario (bar
//! charts) and queue length over time per scenario (overlaid step plot).
//!
//! [`render_console_report`] produces the terminal summary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, render_console_report, write_report};
//!
//! print!("{}", render_console_report(&report));
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &report)?;
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use console::{render_console_report, render_run_line};
pub use error::{OutputError, OutputResult};
pub use report::write_report;
pub use row::{ComparisonRow, QueueSampleRow, ScenarioSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
