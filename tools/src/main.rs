//! monty-hall: Monte Carlo runner for the Monty Hall game.
//!
//! Usage:
//!   monty-hall
//!   monty-hall --simulations 100000
//!   monty-hall --simulations 5 --verbose

use anyhow::Result;
use montyhall_core::{
    config::{RunConfig, USAGE_ARGS},
    runner::SimulationRunner,
};
use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args_os();
    let program = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "monty-hall".to_string());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE_ARGS}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = OsString>) -> Result<()> {
    let config = RunConfig::from_args(args)?;
    init_logging(&config);

    let mut runner = SimulationRunner::from_entropy();
    runner.simulate(config.simulations)?;
    Ok(())
}

/// Report lines go to stdout as bare messages; the level filter is the
/// only verbosity switch.
fn init_logging(config: &RunConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
