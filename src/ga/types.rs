//! Population records.

use super::codec::ChromosomeCodec;
use super::objective::Interval;

/// A candidate solution: one chromosome per axis plus its fitness.
///
/// Fitness is [`f64::NEG_INFINITY`] until the individual is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Chromosome decoded onto the x axis.
    pub x: u64,
    /// Chromosome decoded onto the y axis.
    pub y: u64,
    /// Objective value at the decoded point.
    pub fitness: f64,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(x: u64, y: u64) -> Self {
        Self {
            x,
            y,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Whether [`fitness`](Self::fitness) holds an evaluated value.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != f64::NEG_INFINITY
    }

    /// Decodes both chromosomes onto `domain`.
    pub fn point(&self, codec: &ChromosomeCodec, domain: Interval) -> (f64, f64) {
        (codec.decode(self.x, domain), codec.decode(self.y, domain))
    }
}

impl Default for Individual {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// The best individual seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elite {
    /// Evaluated copy of the best individual.
    pub individual: Individual,

    /// Generations since the record was last improved.
    pub age: usize,
}

impl Elite {
    pub fn fitness(&self) -> f64 {
        self.individual.fitness
    }
}
