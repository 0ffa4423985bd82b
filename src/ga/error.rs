//! Error types for the GA engine.

use thiserror::Error;

/// Rejected hyperparameters.
///
/// Returned by [`GaConfig::validate`](super::GaConfig::validate) and by
/// [`Population::new`](super::Population::new). Values are never clamped
/// silently; an out-of-range setting is always reported here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size is zero.
    #[error("population_size must be positive")]
    EmptyPopulation,

    /// Population size is odd; offspring are produced in pairs.
    #[error("population_size must be even, got {0}")]
    OddPopulation(usize),

    /// Chromosome width outside `2..=64`.
    #[error("chromosome_size must be within 2..=64, got {0}")]
    ChromosomeSize(u32),

    /// Crossover probability outside `[0, 1]`.
    #[error("crossover_rate must be within [0, 1], got {0}")]
    CrossoverRate(f64),

    /// Mutation probability outside `[0, 1]`.
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRate(f64),

    /// Objective domain is empty, inverted, or not finite.
    #[error("objective domain [{lo}, {hi}] must be finite with lo < hi")]
    Domain { lo: f64, hi: f64 },
}

/// Errors raised while building or evolving a population.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The objective produced NaN or an infinity.
    #[error("objective returned non-finite fitness {value} at ({x}, {y})")]
    NonFiniteFitness { x: f64, y: f64, value: f64 },
}
