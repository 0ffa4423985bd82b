//! Bit-level genetic operators for fixed-width chromosomes.
//!
//! # Crossover
//!
//! - [`cross`]: single-point crossover applied with probability `rate`
//! - [`cross_at`]: the deterministic swap at a given split point
//!
//! # Mutation
//!
//! - [`mutate`]: single-bit flip applied with probability `rate`
//! - [`toggle_bit`]: the deterministic flip of one bit
//!
//! Bit positions are counted from the least significant bit.

use super::codec::ChromosomeCodec;
use super::random::RandomSource;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover of two chromosomes.
///
/// Draws `p ∈ [0, 1)`. When the chromosomes differ and `p < rate`, draws a
/// split point `t ∈ [1, bits - 1]` and returns [`cross_at`]. Otherwise the
/// parents are returned unchanged.
pub fn cross<R: RandomSource + ?Sized>(
    codec: &ChromosomeCodec,
    parent1: u64,
    parent2: u64,
    rate: f64,
    rng: &mut R,
) -> (u64, u64) {
    let p = rng.unit();
    if parent1 == parent2 || p >= rate {
        return (parent1, parent2);
    }
    let t = rng.uniform_inclusive(1, u64::from(codec.bits() - 1)) as u32;
    cross_at(codec, parent1, parent2, t)
}

/// Swaps the high segments of two chromosomes at split point `t`.
///
/// The low segment is bits `[0, t)`, the high segment bits `[t, bits)`.
/// Each child keeps its own low segment and takes the other's high one:
///
/// ```
/// use u_bitga::ga::ChromosomeCodec;
/// use u_bitga::ga::operators::cross_at;
///
/// let codec = ChromosomeCodec::new(4).unwrap();
/// assert_eq!(cross_at(&codec, 0b1100, 0b1111, 1), (0b1110, 0b1101));
/// ```
///
/// # Panics
/// Panics if `t` is not in `1..bits`.
pub fn cross_at(codec: &ChromosomeCodec, parent1: u64, parent2: u64, t: u32) -> (u64, u64) {
    assert!(
        (1..codec.bits()).contains(&t),
        "split point {t} outside 1..{}",
        codec.bits()
    );
    let full = codec.max_value();
    let high = (full << t) & full;
    let low = full >> (codec.bits() - t);

    let child1 = (parent2 & high) | (parent1 & low);
    let child2 = (parent1 & high) | (parent2 & low);
    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Single-bit mutation.
///
/// Draws `p ∈ [0, 1)`. When `p < rate`, draws a bit position
/// `t ∈ [1, bits]` and returns [`toggle_bit`]. Otherwise the chromosome is
/// returned unchanged.
pub fn mutate<R: RandomSource + ?Sized>(
    codec: &ChromosomeCodec,
    chromosome: u64,
    rate: f64,
    rng: &mut R,
) -> u64 {
    if rng.unit() >= rate {
        return chromosome;
    }
    let t = rng.uniform_inclusive(1, u64::from(codec.bits())) as u32;
    toggle_bit(codec, chromosome, t)
}

/// Flips bit `t - 1` (1-based position `t`).
///
/// Involutive: toggling the same position twice restores the input.
///
/// # Panics
/// Panics if `t` is not in `1..=bits`.
pub fn toggle_bit(codec: &ChromosomeCodec, chromosome: u64, t: u32) -> u64 {
    assert!(
        (1..=codec.bits()).contains(&t),
        "bit position {t} outside 1..={}",
        codec.bits()
    );
    chromosome ^ (1u64 << (t - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use crate::ga::random::scripted::Scripted;
    use proptest::prelude::*;

    fn codec(bits: u32) -> ChromosomeCodec {
        ChromosomeCodec::new(bits).unwrap()
    }

    // ---- cross_at ----

    #[test]
    fn test_cross_at_hand_computed() {
        let c = codec(8);
        // t = 3: low = 0b0000_0111, high = 0b1111_1000
        let (a, b) = cross_at(&c, 0b1010_1010, 0b0101_0101, 3);
        assert_eq!(a, 0b0101_0010);
        assert_eq!(b, 0b1010_1101);
    }

    #[test]
    fn test_cross_at_full_width() {
        let c = codec(64);
        let (a, b) = cross_at(&c, u64::MAX, 0, 32);
        assert_eq!(a, 0x0000_0000_FFFF_FFFF);
        assert_eq!(b, 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    #[should_panic(expected = "split point")]
    fn test_cross_at_rejects_zero_split() {
        cross_at(&codec(8), 1, 2, 0);
    }

    // ---- cross ----

    #[test]
    fn test_cross_equal_parents_is_noop() {
        let c = codec(16);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(cross(&c, 0xBEEF, 0xBEEF, 1.0, &mut rng), (0xBEEF, 0xBEEF));
        }
    }

    #[test]
    fn test_cross_zero_rate_is_noop() {
        let c = codec(16);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(cross(&c, 0x00FF, 0xFF00, 0.0, &mut rng), (0x00FF, 0xFF00));
        }
    }

    #[test]
    fn test_cross_uses_drawn_split() {
        let c = codec(4);
        let mut rng = Scripted::new(&[0.3], &[2]);
        let out = cross(&c, 0b1010, 0b0101, 0.8, &mut rng);
        assert_eq!(out, cross_at(&c, 0b1010, 0b0101, 2));
        assert_eq!(out, (0b0110, 0b1001));
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_cross_rejected_draw_consumes_only_unit() {
        let c = codec(4);
        let mut rng = Scripted::new(&[0.9], &[]);
        assert_eq!(cross(&c, 0b1010, 0b0101, 0.8, &mut rng), (0b1010, 0b0101));
        assert!(rng.is_exhausted());
    }

    // ---- mutate ----

    #[test]
    fn test_toggle_bit_positions() {
        let c = codec(4);
        assert_eq!(toggle_bit(&c, 0b0000, 1), 0b0001);
        assert_eq!(toggle_bit(&c, 0b1000, 4), 0b0000);
        assert_eq!(toggle_bit(&c, 0b0101, 2), 0b0111);
    }

    #[test]
    fn test_mutate_twice_same_bit_restores() {
        let c = codec(24);
        let original = 0x00AB_CDEF;
        let mut rng = Scripted::new(&[0.0, 0.0], &[13, 13]);
        let once = mutate(&c, original, 0.5, &mut rng);
        assert_ne!(once, original);
        assert_eq!(mutate(&c, once, 0.5, &mut rng), original);
    }

    #[test]
    fn test_mutate_zero_rate_is_noop() {
        let c = codec(24);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(mutate(&c, 12345, 0.0, &mut rng), 12345);
        }
    }

    #[test]
    fn test_mutate_full_rate_flips_one_bit() {
        let c = codec(24);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let m = mutate(&c, 12345, 1.0, &mut rng);
            assert_eq!((m ^ 12345).count_ones(), 1);
            assert!(m <= c.max_value());
        }
    }

    proptest! {
        #[test]
        fn prop_cross_at_swaps_segments(
            bits in 2u32..=64,
            a in any::<u64>(),
            b in any::<u64>(),
            t_seed in any::<u32>(),
        ) {
            let c = codec(bits);
            let (a, b) = (a & c.max_value(), b & c.max_value());
            let t = 1 + t_seed % (bits - 1);
            let (x, y) = cross_at(&c, a, b, t);

            // bits are conserved column by column
            prop_assert_eq!(x ^ y, a ^ b);
            prop_assert_eq!(x.count_ones() + y.count_ones(), a.count_ones() + b.count_ones());
            prop_assert!(x <= c.max_value() && y <= c.max_value());

            let low = c.max_value() >> (bits - t);
            prop_assert_eq!(x & low, a & low);
            prop_assert_eq!(y & low, b & low);
            prop_assert_eq!(x & !low, b & !low);
            prop_assert_eq!(y & !low, a & !low);
        }

        #[test]
        fn prop_toggle_involutive(bits in 2u32..=64, v in any::<u64>(), t_seed in any::<u32>()) {
            let c = codec(bits);
            let v = v & c.max_value();
            let t = 1 + t_seed % bits;
            prop_assert_eq!(toggle_bit(&c, toggle_bit(&c, v, t), t), v);
        }
    }
}
