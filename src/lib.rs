//! Binary-encoded genetic algorithm for bounded bivariate maximization.
//!
//! A fixed-size population of two-chromosome individuals is evolved for a
//! fixed number of generations with roulette-wheel selection, single-point
//! crossover, and single-bit mutation. The default objective is the
//! Schaffer N.2 function on `[-10, 10]²`; any `Fn(f64, f64) -> f64` can be
//! injected instead.
//!
//! ```
//! use u_bitga::ga::{GaConfig, GenerationStats, Population, SchafferN2};
//!
//! let config = GaConfig::default().with_max_generations(10).with_seed(1);
//! let mut rng = config.rng();
//! let mut population = Population::new(config, SchafferN2, &mut rng).unwrap();
//! let summary = population.run(&mut rng, &mut |_: &GenerationStats| {}).unwrap();
//! assert!(summary.best.unwrap().fitness() <= 1.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate fitness on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for configuration and result types

pub mod ga;
