//! Plots the convergence of the genetic algorithm's parallel and sequential runs.
//!
//! # Usage
//!
//! The genetic algorithm writes the best cost of every generation to the `outputs`
//! directory. To compare the runs for 20 cities and 500 generations execute:
//!
//! ```shell
//! $ ga-visualizer 20 500
//! ```
//!
//! To see all options, execute `$ ga-visualizer --help`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

mod consts;
mod error;
mod exec_time;
mod palette;
mod run_reader;
mod visualizer;

use consts::{DEFAULT_OUTPUTS_DIR, DEFAULT_WORKER_COUNT, EXEC_TIME_FILE_NAME};
use error::VisualizerError;
use exec_time::RunTimings;
use palette::{Palette, DEFAULT_PALETTE};
use run_reader::{ResultSet, RunId, RunReader};
use visualizer::{caption, history_as_json, render_plot, Chart};

/// Environment variable that overrides the log level.
const LOG_ENV: &str = "GA_VIZ_LOG";

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// Number of cities of the run.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub cities: u32,
    /// Number of generations of the run.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub generations: u32,
    /// Directory containing the result files.
    #[arg(short, long, default_value = DEFAULT_OUTPUTS_DIR)]
    pub outputs_dir: PathBuf,
    /// Number of parallel workers whose results are plotted.
    #[arg(short, long, default_value_t = DEFAULT_WORKER_COUNT as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: u32,
    /// Comma separated colors, one per plotted series.
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: Palette,
    /// Print the loaded results as JSON before plotting.
    #[arg(short, long, default_value_t = false)]
    pub as_json: bool,
    /// The log level of the application.
    #[arg(short, long, default_value = "error")]
    pub log_level: String,
}

impl Args {
    fn run_id(&self) -> RunId {
        RunId {
            cities: self.cities,
            generations: self.generations,
        }
    }
}

/// Loads the results and lays out the chart, without opening any window.
fn prepare_chart(args: &Args) -> Result<(ResultSet, Chart), VisualizerError> {
    let run = args.run_id();
    let reader = RunReader::new(&args.outputs_dir, args.workers as usize);
    let results = reader.load(run)?;
    debug!(
        "Loaded {} parallel series and {} sequential values for {run}",
        results.parallel().len(),
        results.sequential().len()
    );

    let timings = RunTimings::read(&reader.outputs_dir().join(EXEC_TIME_FILE_NAME), run);
    let chart = Chart::build(&results, &args.palette, caption(run, &timings))?;
    Ok((results, chart))
}

fn run(args: &Args) -> Result<(), VisualizerError> {
    let (results, chart) = prepare_chart(args)?;
    if args.as_json {
        println!("{}", history_as_json(&results)?);
    }
    render_plot(chart)
}

/// Main endpoint for the executable.
fn main() -> ExitCode {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or(LOG_ENV, args.log_level.as_str());
    let _ = env_logger::try_init_from_env(env);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
