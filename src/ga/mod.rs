//! Binary-encoded generational Genetic Algorithm.
//!
//! Individuals carry two fixed-width chromosomes that decode linearly onto
//! a square domain. Each generation is evaluated, bred through roulette
//! selection, single-point crossover and single-bit mutation, and replaced
//! as a whole.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Hyperparameters (population size, width, rates, generations)
//! - [`Population`]: Owns the individuals; `evaluate`, `evolve`, `run`
//! - [`Objective`]: The function to maximize; [`SchafferN2`] is built in
//! - [`ReportSink`]: Receives per-generation [`GenerationStats`]
//!
//! # Submodules
//!
//! - [`operators`]: Bit-level single-point crossover and single-bit mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Schaffer et al. (1989), "A Study of Control Parameters Affecting Online
//!   Performance of Genetic Algorithms for Function Optimization"

mod codec;
mod config;
mod error;
mod objective;
pub mod operators;
mod population;
mod random;
mod report;
mod selection;
mod types;

pub use codec::ChromosomeCodec;
pub use config::GaConfig;
pub use error::{ConfigError, GaError};
pub use objective::{Interval, Objective, SchafferN2};
pub use population::Population;
pub use random::{create_rng, RandomSource};
pub use report::{GenerationStats, ReportSink, RunSummary, StdoutReporter};
pub use selection::RouletteWheel;
pub use types::{Elite, Individual};
