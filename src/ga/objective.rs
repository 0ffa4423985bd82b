//! Objective functions.
//!
//! The engine maximizes an injected pure function `(x, y) -> fitness` over a
//! square domain. [`SchafferN2`] is the built-in benchmark.

use super::error::ConfigError;

/// A closed real interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// `[-10, 10]`, the default search domain.
    pub const SYMMETRIC_TEN: Interval = Interval { lo: -10.0, hi: 10.0 };

    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Checks that both bounds are finite and `lo < hi`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lo.is_finite() && self.hi.is_finite() && self.lo < self.hi {
            Ok(())
        } else {
            Err(ConfigError::Domain {
                lo: self.lo,
                hi: self.hi,
            })
        }
    }
}

/// A bivariate function to maximize.
///
/// Fitness values are used as roulette-wheel weights. They should be
/// finite; negative values are tolerated by shifting the whole population
/// up before normalizing.
///
/// Any `Fn(f64, f64) -> f64` closure is an objective on
/// [`Interval::SYMMETRIC_TEN`]:
///
/// ```
/// use u_bitga::ga::{Interval, Objective};
///
/// let paraboloid = |x: f64, y: f64| 200.0 - x * x - y * y;
/// assert_eq!(paraboloid.evaluate(0.0, 0.0), 200.0);
/// assert_eq!(paraboloid.domain(), Interval::SYMMETRIC_TEN);
/// ```
pub trait Objective: Send + Sync {
    /// Fitness of the point `(x, y)`. Higher is better.
    fn evaluate(&self, x: f64, y: f64) -> f64;

    /// Interval both chromosomes decode onto.
    fn domain(&self) -> Interval {
        Interval::SYMMETRIC_TEN
    }
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Schaffer N.2-style function, shifted so that it is maximized.
///
/// ```text
/// r2 = x² + y²
/// f(x, y) = 0.5 - (sin(√r2)² - 0.5) / (1 + 0.001·r2)²
/// ```
///
/// Values lie in `[0, 1]`; the global maximum `1.0` is at the origin,
/// surrounded by concentric ridges of local optima.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchafferN2;

impl Objective for SchafferN2 {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let r2 = x * x + y * y;
        let numerator = r2.sqrt().sin().powi(2) - 0.5;
        let denominator = (1.0 + 0.001 * r2).powi(2);
        0.5 - numerator / denominator
    }
}
