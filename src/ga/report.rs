//! Per-generation statistics and where they go.

use super::types::{Elite, Individual};
use std::fmt;

/// Fitness statistics of one generation.
///
/// Computed from the fitness values of the evaluation that opened the
/// generation, i.e. of the parents, before replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    pub max: f64,
    pub mean: f64,
    pub min: f64,
}

impl GenerationStats {
    /// Summarizes evaluated individuals.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(generation: usize, population: &[Individual]) -> Self {
        assert!(!population.is_empty(), "population must not be empty");

        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut sum = 0.0;
        for ind in population {
            max = max.max(ind.fitness);
            min = min.min(ind.fitness);
            sum += ind.fitness;
        }

        Self {
            generation,
            max,
            mean: sum / population.len() as f64,
            min,
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.generation, self.max, self.mean, self.min)
    }
}

/// Receives the statistics of every generation of a run.
///
/// Implemented for any `FnMut(&GenerationStats)` closure.
pub trait ReportSink {
    fn report(&mut self, stats: &GenerationStats);
}

impl<F> ReportSink for F
where
    F: FnMut(&GenerationStats),
{
    fn report(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Prints one `generation max mean min` line per generation to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl ReportSink for StdoutReporter {
    fn report(&mut self, stats: &GenerationStats) {
        println!("{stats}");
    }
}

/// Outcome of [`Population::run`](super::Population::run).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Number of generations executed.
    pub generations: usize,

    /// Best individual seen during the run; `None` when no generation ran.
    pub best: Option<Elite>,

    /// Statistics of each generation, in order.
    pub history: Vec<GenerationStats>,
}
