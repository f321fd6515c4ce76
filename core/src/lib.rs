//! montyhall-core: Monte Carlo simulation of the Monty Hall game.
//!
//! RULES:
//!   - All randomness flows through a `RandomSource` owned by the engine.
//!   - Trace output goes through the `log` facade only. The binary decides
//!     what is shown.
//!   - A board lives for exactly one trial.

pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod runner;
pub mod types;
