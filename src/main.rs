/*!
 * CPU Scheduling Simulator - Main Entry Point
 *
 * Usage: cpusim [INPUT] [--config FILE] [--json]
 *
 * Loads a process list (default: process_data.txt), simulates every
 * configured policy on its own copy, and prints a report per policy.
 * Settings resolve as defaults < config file < SIM_* env vars < flags.
 */

use clap::Parser;
use cpu_sched_sim::io::{render_run, to_json};
use cpu_sched_sim::{init_tracing, read_process_data, OutputFormat, SimulationConfig, Simulator};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_INPUT: &str = "process_data.txt";

/// Simulate FCFS, SJF, and Round-Robin CPU scheduling
#[derive(Parser, Debug)]
#[command(name = "cpusim", version)]
#[command(about = "Simulate FCFS, SJF, and Round-Robin CPU scheduling", long_about = None)]
struct Args {
    /// Process file with one `pid arrival burst` line per process
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every run as a JSON array instead of text reports
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    init_tracing();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    }
    .apply_env()?;

    if let Some(input) = args.input {
        config = config.with_input(input);
    }
    if args.json {
        config = config.with_output(OutputFormat::Json);
    }
    config.validate()?;

    let input = config
        .input_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    info!(
        input = %input.display(),
        cs_time = config.cs_time,
        time_quantum = config.time_quantum,
        "starting simulation"
    );

    let processes = read_process_data(&input)?;
    let output = config.output;
    let runs = Simulator::new(config).run_all(&processes)?;

    match output {
        OutputFormat::Text => {
            for run in &runs {
                println!("{}", render_run(run));
            }
        }
        OutputFormat::Json => println!("{}", to_json(&runs)?),
    }

    Ok(())
}
