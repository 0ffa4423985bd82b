//! GA configuration.
//!
//! [`GaConfig`] holds all hyperparameters that control the generational loop.

use super::error::ConfigError;
use super::random::create_rng;
use rand::rngs::StdRng;

/// Configuration for the binary-encoded Genetic Algorithm.
///
/// # Defaults
///
/// The defaults are the classic hyperparameters for the Schaffer N.2
/// benchmark: 50 individuals of two 24-bit chromosomes, evolved for
/// 150 generations.
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.chromosome_size, 24);
/// assert_eq!(config.max_generations, 150);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Setters store values as given. Out-of-range values are reported by
/// [`validate`](Self::validate), never clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals. Must be positive and even.
    pub population_size: usize,

    /// Bit width of each chromosome (`2..=64`).
    ///
    /// Wider chromosomes give a finer grid over the domain:
    /// `(hi - lo) / (2^w - 1)` per step.
    pub chromosome_size: u32,

    /// Probability of crossing a pair of differing chromosomes (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of flipping one bit of a chromosome (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations [`run`](super::Population::run) executes.
    ///
    /// There is no other termination condition.
    pub max_generations: usize,

    /// Carry the best individual seen so far into every new generation.
    pub elitism: bool,

    /// Evaluate fitness on the rayon thread pool.
    ///
    /// Only effective with the `parallel` cargo feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            chromosome_size: 24,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            max_generations: 150,
            elitism: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome bit width.
    pub fn with_chromosome_size(mut self, bits: u32) -> Self {
        self.chromosome_size = bits;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables elitist retention.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the random generator described by [`seed`](Self::seed).
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if !(2..=64).contains(&self.chromosome_size) {
            return Err(ConfigError::ChromosomeSize(self.chromosome_size));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
