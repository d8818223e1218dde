//! Geometric level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::level_generator::LevelGenerator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The probability `$p$` must be in the range `$(0, 1)$`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
    /// Failed to initialize the random number generator.
    #[error("Failed to initialize the random number generator.")]
    RngInitFailed,
}

/// A level generator using a geometric distribution.
///
/// This distribution assumes that if a node is present at some level `$n$`,
/// then the probability that it is present at level `$n+1$` is some constant
/// `$p \in (0, 1)$`. Each extra level is decided by an independent Bernoulli
/// trial, and the result is clamped (not renormalised) at the maximum number
/// of levels allowed: every draw that would reach past the top lands on it.
///
/// The generator is generic over its source of randomness so that tests and
/// benchmarks can inject a seeded [`Rng`].
#[derive(Debug, Clone)]
pub struct Geometric<R = SmallRng> {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a node is present in the next level.
    p: f64,
    /// The random number generator.
    rng: R,
}

impl Geometric<SmallRng> {
    /// Create a new geometric level generator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level. The random number generator is seeded from the operating
    /// system.
    ///
    /// # Errors
    ///
    /// `p` must be between 0 and 1 (exclusive) and `total` must be at least 1.
    /// Seeding may also fail if the operating system cannot provide entropy.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        let rng = SmallRng::try_from_os_rng().map_err(|_err| GeometricError::RngInitFailed)?;
        Self::with_rng(total, p, rng)
    }

    /// Create a new geometric level generator whose random number generator
    /// is seeded with `seed`, yielding a reproducible sequence of levels.
    ///
    /// # Errors
    ///
    /// As for [`Geometric::new`], except that seeding cannot fail.
    #[inline]
    pub fn seeded(total: usize, p: f64, seed: u64) -> Result<Self, GeometricError> {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }
}

impl Default for Geometric<SmallRng> {
    /// A fair coin with no cap on the number of levels, seeded from the
    /// thread-local generator.
    #[inline]
    fn default() -> Self {
        Geometric {
            total: usize::MAX,
            p: 0.5,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl<R: Rng> Geometric<R> {
    /// Create a new geometric level generator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `p` must be between 0 and 1 (exclusive) and `total` must be at least 1.
    #[inline]
    pub fn with_rng(total: usize, p: f64, rng: R) -> Result<Self, GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroMax);
        }
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric { total, p, rng })
    }

    /// The probability that a node is present in the next level.
    #[inline]
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl<R: Rng> LevelGenerator for Geometric<R> {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    /// Generate a level for a new node by flipping a biased coin until it
    /// comes up tails or the top level is reached.
    #[inline]
    fn level(&mut self) -> usize {
        let mut level = 0;
        while level + 1 < self.total && self.rng.random_bool(self.p) {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Geometric, GeometricError, LevelGenerator};

    #[test]
    fn invalid_max() {
        assert_eq!(Geometric::new(0, 0.5).err(), Some(GeometricError::ZeroMax));
    }

    #[test]
    fn invalid_p() {
        assert_eq!(
            Geometric::new(1, 0.0).err(),
            Some(GeometricError::InvalidProbability)
        );
        assert_eq!(
            Geometric::new(1, 1.0).err(),
            Some(GeometricError::InvalidProbability)
        );
        assert_eq!(
            Geometric::new(1, f64::NAN).err(),
            Some(GeometricError::InvalidProbability)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(GeometricError::ZeroMax.to_string(), "max must be non-zero.");
        assert_eq!(
            GeometricError::InvalidProbability.to_string(),
            "p must be in (0, 1)."
        );
    }

    #[rstest]
    fn new(#[values(1, 2, 16, 128)] n: usize, #[values(0.1, 0.5, 0.9)] p: f64) -> Result<()> {
        let mut generator = Geometric::new(n, p)?;
        assert_eq!(generator.total(), n);
        for _ in 0..100_000 {
            let level = generator.level();
            assert!((0..n).contains(&level));
        }
        // Make sure that we can produce at least one level-0 node.
        if !(0..100_000).any(|_| generator.level() == 0) {
            bail!("Failed to generate a level-0 node.");
        }
        Ok(())
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    fn reaches_top_level(#[case] n: usize) -> Result<()> {
        let mut generator = Geometric::seeded(n, 0.5, 0x1234_abcd)?;
        if !(0..100_000).any(|_| generator.level() == n - 1) {
            bail!("Failed to generate a level-{} node.", n - 1);
        }
        Ok(())
    }

    #[test]
    fn keeps_parameters() -> Result<()> {
        let generator = Geometric::seeded(8, 0.25, 1)?;
        assert_eq!(generator.total(), 8);
        assert_eq!(generator.p(), 0.25);

        let default: Geometric = Geometric::default();
        assert_eq!(default.total(), usize::MAX);
        assert_eq!(default.p(), 0.5);
        Ok(())
    }

    #[test]
    fn seeded_is_reproducible() -> Result<()> {
        let mut a = Geometric::seeded(32, 0.5, 42)?;
        let mut b = Geometric::seeded(32, 0.5, 42)?;
        let xs: Vec<usize> = (0..1000).map(|_| a.level()).collect();
        let ys: Vec<usize> = (0..1000).map(|_| b.level()).collect();
        assert_eq!(xs, ys);
        Ok(())
    }

    #[test]
    fn fair_coin_halves_each_level() -> Result<()> {
        let mut generator = Geometric::seeded(64, 0.5, 7)?;
        let draws = 200_000;
        let mut counts = [0_usize; 4];
        for _ in 0..draws {
            let level = generator.level();
            if let Some(count) = counts.get_mut(level) {
                *count += 1;
            }
        }
        // Expect roughly 1/2, 1/4, 1/8 and 1/16 of the draws.
        for (level, &count) in counts.iter().enumerate() {
            let expected = draws >> (level + 1);
            let tolerance = expected / 10;
            assert!(
                count.abs_diff(expected) < tolerance,
                "level {level}: got {count}, expected about {expected}"
            );
        }
        Ok(())
    }
}
