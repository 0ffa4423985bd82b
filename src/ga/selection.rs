//! Fitness-proportionate (roulette wheel) selection.
//!
//! The wheel stores the cumulative distribution of the population's
//! normalized fitness. It is rebuilt on every evaluation and queried twice
//! per offspring pair.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::random::RandomSource;

/// Cumulative selection probabilities, one slot per individual.
///
/// ```
/// use u_bitga::ga::RouletteWheel;
///
/// let wheel = RouletteWheel::from_weights(&[1.0, 1.0, 2.0]);
/// assert_eq!(wheel.cumulative(), &[0.25, 0.5, 1.0]);
/// assert_eq!(wheel.pick(0.3), 1);
/// assert_eq!(wheel.pick(0.99), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    /// Builds the wheel from fitness weights.
    ///
    /// Weights are shifted by `-min` when any is negative, so the
    /// distribution stays well formed. When the total weight is zero every
    /// slot is equally likely. Weights must be finite.
    pub fn from_weights(weights: &[f64]) -> Self {
        let n = weights.len();
        if n == 0 {
            return Self::default();
        }

        let min = weights.iter().cloned().fold(f64::INFINITY, f64::min);
        let shift = if min < 0.0 { -min } else { 0.0 };
        let total: f64 = weights.iter().map(|&w| w + shift).sum();

        let mut cumulative = Vec::with_capacity(n);
        if total > 0.0 {
            let mut acc = 0.0;
            for &w in weights {
                acc += (w + shift) / total;
                cumulative.push(acc);
            }
        } else {
            for i in 1..=n {
                cumulative.push(i as f64 / n as f64);
            }
        }

        Self { cumulative }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// The cumulative distribution; non-decreasing, last element ≈ 1.0.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Returns the first slot whose cumulative value exceeds `threshold`.
    ///
    /// Falls back to the last slot when no value exceeds it, which happens
    /// only through floating-point drift at the tail.
    ///
    /// # Panics
    /// Panics if the wheel is empty.
    pub fn pick(&self, threshold: f64) -> usize {
        assert!(!self.is_empty(), "cannot select from empty population");

        // Linear scan, matching the index order of the population.
        self.cumulative
            .iter()
            .position(|&p| p > threshold)
            .unwrap_or(self.cumulative.len() - 1)
    }

    /// Spins the wheel once.
    pub fn select<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick(rng.unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_cumulative_is_normalized() {
        let wheel = RouletteWheel::from_weights(&[0.2, 0.5, 0.1, 0.7, 0.5]);
        let cum = wheel.cumulative();
        assert_eq!(cum.len(), 5);
        for w in cum.windows(2) {
            assert!(w[1] >= w[0]);
        }
        assert!((cum[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_favors_heavier_slots() {
        let wheel = RouletteWheel::from_weights(&[1.0, 8.0, 1.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        let n = 10000;
        for _ in 0..n {
            counts[wheel.select(&mut rng)] += 1;
        }
        assert!(
            counts[1] > 7000,
            "expected heavy slot ~80% of the time, got {counts:?}"
        );
        assert!(counts[0] > 0 && counts[2] > 0);
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let wheel = RouletteWheel::from_weights(&[0.0, 1.0, 0.0, 1.0]);
        let mut rng = create_rng(3);
        for _ in 0..5000 {
            let idx = wheel.select(&mut rng);
            assert!(idx == 1 || idx == 3, "selected zero-weight slot {idx}");
        }
    }

    #[test]
    fn test_pick_clamps_past_tail() {
        let wheel = RouletteWheel::from_weights(&[1.0, 1.0, 1.0]);
        assert_eq!(wheel.pick(1.0), 2);
        assert_eq!(wheel.pick(5.0), 2);
    }

    #[test]
    fn test_pick_boundary_is_exclusive() {
        // 0.25 does not exceed 0.25, so the scan moves on
        let wheel = RouletteWheel::from_weights(&[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(wheel.pick(0.0), 0);
        assert_eq!(wheel.pick(0.25), 1);
        assert_eq!(wheel.pick(0.7499), 2);
    }

    #[test]
    fn test_negative_weights_are_shifted() {
        let wheel = RouletteWheel::from_weights(&[-1.0, 0.0, 1.0]);
        // shifted to [0, 1, 2], total 3
        let cum = wheel.cumulative();
        assert!((cum[0] - 0.0).abs() < 1e-12);
        assert!((cum[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((cum[2] - 1.0).abs() < 1e-12);
        assert_eq!(wheel.pick(0.0), 1);
    }

    #[test]
    fn test_all_zero_is_uniform() {
        let wheel = RouletteWheel::from_weights(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(wheel.cumulative(), &[0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_single_slot() {
        let wheel = RouletteWheel::from_weights(&[3.0]);
        let mut rng = create_rng(42);
        assert_eq!(wheel.select(&mut rng), 0);
        assert_eq!(wheel.pick(1.0), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_wheel_panics() {
        let wheel = RouletteWheel::from_weights(&[]);
        wheel.pick(0.5);
    }

    proptest! {
        #[test]
        fn prop_pick_in_bounds(
            weights in prop::collection::vec(0.0f64..1.0, 1..64),
            t in 0.0f64..1.0,
        ) {
            let wheel = RouletteWheel::from_weights(&weights);
            prop_assert!(wheel.pick(t) < weights.len());
        }

        #[test]
        fn prop_cumulative_monotone(weights in prop::collection::vec(1e-6f64..1.0, 1..64)) {
            let wheel = RouletteWheel::from_weights(&weights);
            let cum = wheel.cumulative();
            for w in cum.windows(2) {
                prop_assert!(w[1] >= w[0]);
            }
            prop_assert!((cum[cum.len() - 1] - 1.0).abs() < 1e-9);
        }
    }
}
