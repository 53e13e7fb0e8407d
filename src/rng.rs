//! Randomness seam.
//!
//! Games draw random numbers through [`RandomSource`] so tests can script
//! exact sequences. On target the firmware seeds a [`Prng`] from the
//! hardware RNG once at boot.

use nanorand::{Rng, WyRand};

/// Uniform integer source with Arduino-style bounds.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn random(&mut self, bound: u32) -> u32;

    /// Uniform value in `[min, max)`. Returns `min` when the range is empty.
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = max.abs_diff(min);
        min.wrapping_add(self.random(span) as i32)
    }
}

/// Seedable pseudo-random generator (WyRand). Not cryptographic.
pub struct Prng {
    inner: WyRand,
}

impl Prng {
    /// Create a generator from an entropy word.
    pub fn seeded(entropy: u64) -> Self {
        Self {
            inner: WyRand::new_seed(entropy),
        }
    }
}

impl RandomSource for Prng {
    fn random(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.inner.generate_range(0..bound)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn prng_stays_within_bound() {
        let mut rng = Prng::seeded(0xDEAD_BEEF);
        for _ in 0..1000 {
            assert!(rng.random(32) < 32);
        }
    }

    #[test]
    fn prng_range_is_half_open() {
        let mut rng = Prng::seeded(7);
        for _ in 0..1000 {
            let v = rng.random_range(8, 16);
            assert!((8..16).contains(&v));
        }
    }

    #[test]
    fn prng_is_reproducible_for_a_seed() {
        let mut a = Prng::seeded(42);
        let mut b = Prng::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.random(1000), b.random(1000));
        }
    }

    #[test]
    fn degenerate_bounds_return_lower_bound() {
        let mut rng = Prng::seeded(1);
        assert_eq!(rng.random(0), 0);
        assert_eq!(rng.random_range(5, 5), 5);
        assert_eq!(rng.random_range(9, 3), 9);
    }

    #[test]
    fn scripted_source_offsets_range() {
        let mut rng = Scripted::new(&[3, 100]);
        assert_eq!(rng.random_range(4, 11), 7);
        assert_eq!(rng.random(10), 0);
        assert_eq!(rng.random(10), 0);
    }
}
