//! Fixed-width binary chromosome encoding.
//!
//! A chromosome is an unsigned integer of `bits` width. It discretizes an
//! interval into `2^bits - 1` equal steps and decodes linearly.

use super::error::ConfigError;
use super::objective::Interval;
use super::random::RandomSource;

/// Width, mask, and decoding for fixed-width chromosomes.
///
/// ```
/// use u_bitga::ga::{ChromosomeCodec, Interval};
///
/// let codec = ChromosomeCodec::new(4).unwrap();
/// let domain = Interval::new(-10.0, 10.0);
/// assert_eq!(codec.max_value(), 15);
/// assert_eq!(codec.decode(0, domain), -10.0);
/// assert_eq!(codec.decode(15, domain), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromosomeCodec {
    bits: u32,
    mask: u64,
}

impl ChromosomeCodec {
    /// Creates a codec for `bits`-wide chromosomes (`2..=64`).
    pub fn new(bits: u32) -> Result<Self, ConfigError> {
        if !(2..=64).contains(&bits) {
            return Err(ConfigError::ChromosomeSize(bits));
        }
        Ok(Self {
            bits,
            mask: u64::MAX >> (64 - bits),
        })
    }

    /// Chromosome width in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// All-ones mask of the chromosome width, i.e. `2^bits - 1`.
    pub fn max_value(&self) -> u64 {
        self.mask
    }

    /// Draws a chromosome uniformly from `[0, 2^bits - 1]`.
    pub fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.uniform_inclusive(0, self.mask)
    }

    /// Maps `chromosome` linearly onto `interval`.
    ///
    /// `0` maps to `lo`, [`max_value`](Self::max_value) maps to `hi`.
    pub fn decode(&self, chromosome: u64, interval: Interval) -> f64 {
        let steps = self.mask as f64;
        interval.lo + chromosome as f64 * (interval.hi - interval.lo) / steps
    }
}
