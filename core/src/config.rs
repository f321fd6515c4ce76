//! Run configuration, parsed from the command line.
//!
//! Only two knobs exist: the trial count per strategy and the verbose
//! flag. Anything else on the command line is an error.

use crate::error::{SimError, SimResult};
use log::LevelFilter;
use std::ffi::OsString;

pub const DEFAULT_SIMULATIONS: u64 = 10_000;

pub const USAGE_ARGS: &str = "[--simulations <number>] [--verbose]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Trials per strategy. Always > 0 once parsed.
    pub simulations: u64,
    pub verbose:     bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            verbose:     false,
        }
    }
}

impl RunConfig {
    /// Parse arguments, program name excluded. Arguments that are not
    /// valid UTF-8 are rejected like any other unknown argument.
    pub fn from_args<I, S>(args: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(into_utf8);

        while let Some(arg) = args.next() {
            match arg?.as_str() {
                "--simulations" => {
                    let value = args.next().ok_or_else(|| {
                        SimError::InvalidArgument("--simulations requires a value".into())
                    })??;
                    config.simulations = parse_simulations(&value)?;
                }
                "--verbose" => config.verbose = true,
                other => {
                    return Err(SimError::InvalidArgument(other.to_string()));
                }
            }
        }

        Ok(config)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn into_utf8(arg: impl Into<OsString>) -> SimResult<String> {
    arg.into()
        .into_string()
        .map_err(|raw| SimError::InvalidArgument(raw.to_string_lossy().into_owned()))
}

fn parse_simulations(raw: &str) -> SimResult<u64> {
    let n: i64 = raw.parse().map_err(|_| {
        SimError::InvalidArgument(format!("--simulations expects an integer, got '{raw}'"))
    })?;
    if n <= 0 {
        return Err(SimError::InvalidArgument(format!(
            "--simulations must be positive, got {n}"
        )));
    }
    Ok(n as u64)
}
