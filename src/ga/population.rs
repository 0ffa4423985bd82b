//! Generational population and evolutionary loop.
//!
//! [`Population`] owns the individuals of the current generation and
//! replaces all of them at once on every [`evolve`](Population::evolve):
//! evaluation → roulette selection → crossover → mutation → replacement.

use super::codec::ChromosomeCodec;
use super::config::GaConfig;
use super::error::GaError;
use super::objective::{Interval, Objective, SchafferN2};
use super::operators::{cross, mutate};
use super::random::RandomSource;
use super::report::{GenerationStats, ReportSink, RunSummary};
use super::selection::RouletteWheel;
use super::types::{Elite, Individual};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A fixed-size population of two-chromosome individuals.
///
/// Randomness is never stored: every stochastic operation borrows the
/// caller's generator.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, Population, SchafferN2};
///
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let mut rng = config.rng();
/// let mut population = Population::new(config, SchafferN2, &mut rng).unwrap();
///
/// let mut lines = Vec::new();
/// let summary = population
///     .run(&mut rng, &mut |s: &u_bitga::ga::GenerationStats| lines.push(s.to_string()))
///     .unwrap();
/// assert_eq!(summary.generations, 20);
/// assert_eq!(lines.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Population<O: Objective = SchafferN2> {
    config: GaConfig,
    codec: ChromosomeCodec,
    domain: Interval,
    objective: O,
    individuals: Vec<Individual>,
    offspring: Vec<Individual>,
    wheel: RouletteWheel,
    elite: Option<Elite>,
    generation: usize,
}

impl<O: Objective> Population<O> {
    /// Creates a population of `config.population_size` random individuals.
    ///
    /// Chromosomes are drawn uniformly over the full width, x before y,
    /// in index order.
    ///
    /// # Errors
    /// [`GaError::Config`] if the configuration or the objective's domain is
    /// invalid.
    pub fn new<R: RandomSource + ?Sized>(
        config: GaConfig,
        objective: O,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        config.validate()?;
        let domain = objective.domain();
        domain.validate()?;
        let codec = ChromosomeCodec::new(config.chromosome_size)?;

        let size = config.population_size;
        let individuals = (0..size)
            .map(|_| {
                let x = codec.random(rng);
                let y = codec.random(rng);
                Individual::new(x, y)
            })
            .collect();

        Ok(Self {
            codec,
            domain,
            objective,
            individuals,
            offspring: vec![Individual::default(); size],
            wheel: RouletteWheel::from_weights(&vec![0.0; size]),
            elite: None,
            generation: 0,
            config,
        })
    }

    /// The hyperparameters this population was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Chromosome width and decoding shared by all individuals.
    pub fn codec(&self) -> &ChromosomeCodec {
        &self.codec
    }

    /// The function being maximized.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Individuals of the current generation.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Cumulative selection probabilities from the last evaluation.
    ///
    /// Uniform until the first [`evaluate`](Self::evaluate).
    pub fn selector_probability(&self) -> &[f64] {
        self.wheel.cumulative()
    }

    /// Best individual recorded by [`evolve`](Self::evolve) so far.
    pub fn elite(&self) -> Option<&Elite> {
        self.elite.as_ref()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Decoded `(x, y)` of an individual.
    pub fn point(&self, individual: &Individual) -> (f64, f64) {
        individual.point(&self.codec, self.domain)
    }

    /// Evaluates every individual and rebuilds the selection wheel.
    ///
    /// # Errors
    /// [`GaError::NonFiniteFitness`] if the objective returns NaN or an
    /// infinity for any individual. The wheel is left untouched.
    pub fn evaluate(&mut self) -> Result<(), GaError> {
        let codec = self.codec;
        let domain = self.domain;
        let objective = &self.objective;
        let score = |ind: &mut Individual| {
            let (x, y) = ind.point(&codec, domain);
            ind.fitness = objective.evaluate(x, y);
        };

        score_all(&mut self.individuals, self.config.parallel, score);

        if let Some(bad) = self.individuals.iter().find(|ind| !ind.fitness.is_finite()) {
            let (x, y) = bad.point(&self.codec, self.domain);
            return Err(GaError::NonFiniteFitness {
                x,
                y,
                value: bad.fitness,
            });
        }

        let weights: Vec<f64> = self.individuals.iter().map(|ind| ind.fitness).collect();
        self.wheel = RouletteWheel::from_weights(&weights);
        Ok(())
    }

    /// Roulette-wheel selection over the last evaluation.
    ///
    /// Always returns an index below [`len`](Self::len). Before the first
    /// [`evaluate`](Self::evaluate) every individual is equally likely.
    pub fn select<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        self.wheel.select(rng)
    }

    /// Advances one generation.
    ///
    /// Evaluates the current individuals, breeds `len / 2` offspring pairs
    /// into the staging buffer, then replaces the whole population with it.
    /// Returns the statistics of the evaluated (parent) generation.
    pub fn evolve<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<GenerationStats, GaError> {
        self.evaluate()?;
        let stats = GenerationStats::from_population(self.generation, &self.individuals);
        self.update_elite();

        let codec = self.codec;
        let cp = self.config.crossover_rate;
        let mp = self.config.mutation_rate;

        for i in (0..self.individuals.len()).step_by(2) {
            let p1 = self.individuals[self.select(rng)];
            let p2 = self.individuals[self.select(rng)];

            let (x1, x2) = cross(&codec, p1.x, p2.x, cp, rng);
            let (y1, y2) = cross(&codec, p1.y, p2.y, cp, rng);

            let x1 = mutate(&codec, x1, mp, rng);
            let y1 = mutate(&codec, y1, mp, rng);
            let x2 = mutate(&codec, x2, mp, rng);
            let y2 = mutate(&codec, y2, mp, rng);

            self.offspring[i] = Individual::new(x1, y1);
            self.offspring[i + 1] = Individual::new(x2, y2);
        }

        if self.config.elitism {
            if let Some(elite) = &self.elite {
                self.offspring[0] = Individual::new(elite.individual.x, elite.individual.y);
            }
        }

        for (live, next) in self.individuals.iter_mut().zip(&self.offspring) {
            *live = Individual::new(next.x, next.y);
        }

        self.generation += 1;
        debug!(
            generation = stats.generation,
            max = stats.max,
            mean = stats.mean,
            min = stats.min,
            "generation evolved"
        );
        Ok(stats)
    }

    /// Runs `max_generations` generations, reporting each one to `sink`.
    ///
    /// There is no early termination.
    pub fn run<R, S>(&mut self, rng: &mut R, sink: &mut S) -> Result<RunSummary, GaError>
    where
        R: RandomSource + ?Sized,
        S: ReportSink + ?Sized,
    {
        let generations = self.config.max_generations;
        info!(
            population_size = self.len(),
            chromosome_size = self.codec.bits(),
            generations,
            "starting GA run"
        );

        let mut history = Vec::with_capacity(generations);
        for _ in 0..generations {
            let stats = self.evolve(rng)?;
            sink.report(&stats);
            history.push(stats);
        }

        if let Some(elite) = &self.elite {
            let (x, y) = self.point(&elite.individual);
            info!(fitness = elite.fitness(), x, y, "GA run finished");
        }

        Ok(RunSummary {
            generations,
            best: self.elite,
            history,
        })
    }

    /// Records the best evaluated individual of the current generation.
    fn update_elite(&mut self) {
        let Some(best) = self
            .individuals
            .iter()
            .copied()
            .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
        else {
            return;
        };

        match self.elite.as_mut() {
            Some(elite) => {
                if best.fitness > elite.fitness() {
                    elite.individual = best;
                    elite.age = 0;
                } else {
                    elite.age += 1;
                }
            }
            None => {
                self.elite = Some(Elite {
                    individual: best,
                    age: 0,
                });
            }
        }
    }
}

/// Applies `score` to every individual, on rayon when `parallel` is set.
#[cfg(feature = "parallel")]
fn score_all<F>(individuals: &mut [Individual], parallel: bool, score: F)
where
    F: Fn(&mut Individual) + Send + Sync,
{
    if parallel {
        individuals.par_iter_mut().for_each(score);
    } else {
        individuals.iter_mut().for_each(score);
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<F>(individuals: &mut [Individual], _parallel: bool, score: F)
where
    F: Fn(&mut Individual),
{
    individuals.iter_mut().for_each(score);
}

// ============================================================================
// Tests
// ============================================================================
