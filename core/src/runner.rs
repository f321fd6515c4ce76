//! Repeated-trial aggregation.

use crate::{
    engine::GameEngine,
    error::{SimError, SimResult},
    rng::{RandomSource, TrialRng},
    types::Strategy,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateResult {
    pub strategy:   Strategy,
    pub trials_run: u64,
    pub wins:       u64,
    pub win_ratio:  f64,
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simulations: {}, Wins: {}, Win Ratio: {:.2}",
            self.trials_run, self.wins, self.win_ratio
        )
    }
}

pub struct SimulationRunner<R: RandomSource = TrialRng> {
    engine: GameEngine<R>,
}

impl SimulationRunner<TrialRng> {
    pub fn from_entropy() -> Self {
        Self::new(GameEngine::from_entropy())
    }
}

impl<R: RandomSource> SimulationRunner<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self { engine }
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<R> {
        &mut self.engine
    }

    /// Run `trial_count` independent trials with one strategy.
    pub fn run(&mut self, trial_count: u64, strategy: Strategy) -> SimResult<AggregateResult> {
        if trial_count == 0 {
            return Err(SimError::InvalidArgument(
                "trial count must be greater than 0".into(),
            ));
        }

        let mut wins = 0u64;
        for trial in 1..=trial_count {
            let won = self.engine.play_trial(strategy)?;
            log::debug!("Trial {trial}: {}", if won { "win" } else { "loss" });
            wins += u64::from(won);
        }

        let result = AggregateResult {
            strategy,
            trials_run: trial_count,
            wins,
            win_ratio: wins as f64 / trial_count as f64,
        };
        log::info!("{result}");
        Ok(result)
    }

    /// Stay first, then Switch, same trial count, same random source.
    pub fn simulate(&mut self, trial_count: u64) -> SimResult<[AggregateResult; 2]> {
        let stay = self.run_announced(trial_count, Strategy::Stay)?;
        let switch = self.run_announced(trial_count, Strategy::Switch)?;
        Ok([stay, switch])
    }

    fn run_announced(&mut self, trial_count: u64, strategy: Strategy) -> SimResult<AggregateResult> {
        log::info!("Running simulation where {}:", strategy.description());
        self.run(trial_count, strategy)
    }
}
