//! call-center: compare average caller wait across staffing levels.
//!
//! Runs every scenario of a set (the stock 3/4/5-agent study unless a TOML
//! file is given) on one seeded stream, prints the summary, and writes the
//! chart tables to the output directory.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cc_experiment::{ExperimentRunner, ScenarioSet, load_scenarios_toml};
use cc_output::{CsvWriter, render_console_report, write_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML scenario file.  Defaults to the built-in 3/4/5-agent study.
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Seed for the shared random stream (overrides the file).
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds per scenario (overrides the file).
    #[arg(long)]
    total_time: Option<u64>,

    /// Seconds per step (overrides the file).
    #[arg(long)]
    dt: Option<u64>,

    /// Directory for the CSV tables.
    #[arg(short, long, default_value = "output/call-center")]
    output: PathBuf,

    /// Only print the console report.
    #[arg(long, default_value_t = false)]
    no_files: bool,

    /// Also dump the full report as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write `output.db` next to the CSV tables.
    #[cfg(feature = "sqlite")]
    #[arg(long, default_value_t = false)]
    sqlite: bool,

    /// Give each scenario its own stream and run them in parallel.
    #[cfg(feature = "parallel")]
    #[arg(long, default_value_t = false)]
    independent: bool,

    /// More log output (-v debug, -vv trace).  `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn scenario_set(args: &Args) -> Result<ScenarioSet> {
    let mut set = match &args.scenarios {
        Some(path) => load_scenarios_toml(path)
            .with_context(|| format!("loading scenarios from {}", path.display()))?,
        None => ScenarioSet::call_center_default(),
    };
    if let Some(seed) = args.seed {
        set = set.with_seed(seed);
    }
    if args.total_time.is_some() || args.dt.is_some() {
        let total_time = args.total_time.unwrap_or(set.total_time);
        let dt = args.dt.unwrap_or(set.dt);
        set = set.with_timing(total_time, dt);
    }
    Ok(set)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // 1. Scenarios.
    let set = scenario_set(&args)?;
    info!(
        "{} scenarios, {} s at {} s/step, seed {}, baseline {}",
        set.scenarios.len(),
        set.total_time,
        set.dt,
        set.seed,
        set.baseline
    );
    let runner = ExperimentRunner::new(set).context("invalid scenario set")?;

    // 2. Run.
    let t0 = Instant::now();
    #[cfg(feature = "parallel")]
    let report = if args.independent {
        runner.run_independent()?
    } else {
        runner.run_seeded()?
    };
    #[cfg(not(feature = "parallel"))]
    let report = runner.run_seeded()?;
    info!("simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    // 3. Console summary.
    print!("{}", render_console_report(&report));

    // 4. Chart tables.
    if !args.no_files {
        std::fs::create_dir_all(&args.output)
            .with_context(|| format!("creating {}", args.output.display()))?;
        let mut writer = CsvWriter::new(&args.output)?;
        write_report(&mut writer, &report)?;
        for file in [
            cc_output::csv::SUMMARIES_FILE,
            cc_output::csv::QUEUE_FILE,
            cc_output::csv::COMPARISONS_FILE,
        ] {
            println!("Saved {}", args.output.join(file).display());
        }

        #[cfg(feature = "sqlite")]
        if args.sqlite {
            let mut db = cc_output::SqliteWriter::new(&args.output)?;
            write_report(&mut db, &report)?;
            println!("Saved {}", args.output.join("output.db").display());
        }
    }

    // 5. JSON dump.
    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
        println!("Saved {}", path.display());
    }

    Ok(())
}
