//! The trial engine: plays one Monty Hall game per call.
//!
//! PHASE ORDER (fixed, never reordered, no backtracking):
//!   1. CarPlacement       uniform draw over all doors
//!   2. PlayerInitialPick  independent uniform draw, may hit the car
//!   3. HostReveal         open a door that is neither selected nor the car
//!   4. OptionalSwitch     Switch strategy only: take the last closed door
//!   5. Resolve            win iff the final choice has the car
//!
//! Phases 3 and 4 both go through `choose_index_matching`, so the host
//! picks uniformly when the player's first pick was the car.

use crate::{
    error::SimResult,
    rng::{RandomSource, TrialRng},
    types::{Board, DoorIndex, Strategy, DOOR_COUNT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    CarPlacement,
    PlayerInitialPick,
    HostReveal,
    OptionalSwitch,
    Resolve,
}

pub struct GameEngine<R: RandomSource = TrialRng> {
    rng: R,
}

impl GameEngine<TrialRng> {
    /// Engine with a fresh entropy-seeded generator.
    pub fn from_entropy() -> Self {
        Self::new(TrialRng::from_entropy())
    }
}

impl<R: RandomSource> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Play one trial. Returns true when the player ends on the car.
    pub fn play_trial(&mut self, strategy: Strategy) -> SimResult<bool> {
        self.play_trial_observed(strategy, |_, _| {})
    }

    /// Play one trial, handing the board to `observe` after every
    /// completed phase.
    pub fn play_trial_observed<F>(&mut self, strategy: Strategy, mut observe: F) -> SimResult<bool>
    where
        F: FnMut(TrialPhase, &Board),
    {
        let mut board = Board::new();

        let car = self.rng.uniform_int(DOOR_COUNT - 1);
        board.place_car(car);
        log::debug!("Car is at door {}", car + 1);
        observe(TrialPhase::CarPlacement, &board);

        let mut choice: DoorIndex = self.rng.uniform_int(DOOR_COUNT - 1);
        board.select(choice);
        log::debug!("Player chooses door {}", choice + 1);
        log::debug!("Initial board:");
        log::debug!("{board}");
        observe(TrialPhase::PlayerInitialPick, &board);

        let opened = self
            .rng
            .choose_index_matching(board.doors(), |d| !d.is_selected && !d.has_car)?;
        board.open(opened);
        log::debug!("Door {} opened", opened + 1);
        log::debug!("Current board:");
        log::debug!("{board}");
        observe(TrialPhase::HostReveal, &board);

        if strategy.switches() {
            let remaining = self
                .rng
                .choose_index_matching(board.doors(), |d| !d.is_selected && !d.is_open)?;
            log::debug!("Player changes choice to door {}", remaining + 1);
            board.move_selection(choice, remaining);
            choice = remaining;
            log::debug!("Board after player changes choice:");
            log::debug!("{board}");
            observe(TrialPhase::OptionalSwitch, &board);
        }

        let won = board[choice].has_car;
        observe(TrialPhase::Resolve, &board);
        Ok(won)
    }
}
