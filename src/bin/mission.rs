// Mission runner
// Reads a mission file, runs every rover in order and prints where each one ended

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mars_rovers::display::Display;
use mars_rovers::report::{create_debug_report, create_visualise_data};
use mars_rovers::{run_mission, MissionConfig};

#[derive(Parser)]
#[command(name = "rover-mission")]
#[command(about = "Run a Mars rover mission file and report the final state of every rover")]
struct Args {
    /// Mission file: terrain line, then a position line and an instruction line per rover
    file: PathBuf,

    /// Print the debug report as JSON after the rover lines
    #[arg(long)]
    debug: bool,

    /// Draw the terrain grid with surviving rovers and scents
    #[arg(long)]
    visualise: bool,
}

fn main() -> ExitCode {
    // NOTE - Diagnostics go to stderr so stdout only carries the mission output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    exit_code(run(&args))
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("Mission Failed: {err:#}")
}

fn run(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read file: {}", args.file.display()))?;

    let (mission, outcome) = run_mission(&input, &MissionConfig::default())?;

    for line in outcome.output() {
        println!("{line}");
    }

    if args.debug {
        let report = create_debug_report(mission.terrain(), &outcome);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if args.visualise {
        Display::render(&create_visualise_data(mission.terrain(), &outcome))?;
    }

    Ok(())
}
