//! Seeded pseudo-random engine with ranged generators.
//!
//! This module provides [`RandomEngine`], an explicit generator context that
//! callers own (or borrow from [`crate::shared`]) and pass to whatever needs
//! randomness.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use num_traits::Float;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_distr::uniform::SampleUniform;
use rand_distr::{Distribution, Uniform};
use tracing::trace;

use crate::config::EngineConfig;
use crate::error::{RandomError, Result};

/// Pseudo-random engine with ranged integer, float and blacklist-excluding draws.
///
/// Wraps `rand::rngs::StdRng` together with the seed it was initialised from,
/// so a run can be replayed by logging [`seed`](Self::seed) and feeding it back
/// to [`from_seed`](Self::from_seed). Not suitable for cryptographic use.
///
/// The raw bit stream is available through the [`RngCore`] implementation.
///
/// # Examples
///
/// ```rust
/// use numeric_random::RandomEngine;
///
/// let mut engine = RandomEngine::from_seed(42);
///
/// let die = engine.random_int(1, 7);
/// assert!((1..7).contains(&die));
///
/// let unit: f64 = engine.random_unit();
/// assert!((0.0..=1.0).contains(&unit));
///
/// let pick = engine.random_int_not_in_blacklist(&[12, 15, 18], 10, 20).unwrap();
/// assert!(![12, 15, 18].contains(&pick));
/// ```
#[derive(Clone)]
pub struct RandomEngine {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl RandomEngine {
    /// Creates an engine initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws.
    ///
    /// ```rust
    /// use numeric_random::RandomEngine;
    ///
    /// let mut a = RandomEngine::from_seed(12345);
    /// let mut b = RandomEngine::from_seed(12345);
    /// assert_eq!(a.random_int(0, 1_000_000), b.random_int(0, 1_000_000));
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an engine seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::from_seed(OsRng.next_u64())
    }

    /// Creates an engine from configuration: the fixed seed when set,
    /// OS entropy otherwise.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for the current sequence.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restarts the engine on the sequence for `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Draws an integer uniformly from the half-open range `[low, high)`.
    ///
    /// When `low >= high` there is nothing to draw from and `low` is returned
    /// unchanged; this fallback is part of the contract, not an error.
    ///
    /// ```rust
    /// use numeric_random::RandomEngine;
    ///
    /// let mut engine = RandomEngine::from_seed(7);
    /// assert_eq!(engine.random_int(5, 5), 5);
    /// assert_eq!(engine.random_int(10, 5), 10);
    /// ```
    #[inline]
    pub fn random_int(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        Uniform::new(low, high).sample(&mut self.inner)
    }

    /// Draws a float uniformly from the closed range `[low, high]`.
    ///
    /// When `low < high` does not hold (equal, inverted or NaN bounds) `low`
    /// is returned unchanged. Bounds whose span overflows `T` still produce a
    /// value inside `[low, high]`.
    pub fn random_float<T>(&mut self, low: T, high: T) -> T
    where
        T: Float + SampleUniform,
    {
        if low.partial_cmp(&high) != Some(Ordering::Less) {
            return low;
        }

        // `Uniform` scales the span by 1 / (1 - ε) and needs that finite too
        let scale = (high - low) / (T::one() - T::epsilon());
        if scale.is_finite() {
            return Uniform::new_inclusive(low, high).sample(&mut self.inner);
        }

        // Span overflows: interpolate from a unit draw instead
        let t: T = Uniform::new_inclusive(T::zero(), T::one()).sample(&mut self.inner);
        let value = low * (T::one() - t) + high * t;
        value.max(low).min(high)
    }

    /// Draws a float uniformly from the unit interval `[0, 1]`.
    #[inline]
    pub fn random_unit<T>(&mut self) -> T
    where
        T: Float + SampleUniform,
    {
        self.random_float(T::zero(), T::one())
    }

    /// Draws an integer from `[low, high)` that is not in `blacklist`.
    ///
    /// Uses rejection sampling: values are drawn with
    /// [`random_int`](Self::random_int) and redrawn while they are blacklisted.
    /// Every non-excluded value is equally likely; the expected number of draws
    /// is `range_size / (range_size - excluded)`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvertedRange`] when `low > high`
    /// - [`RandomError::BlacklistTooLarge`] when `blacklist.len() >= high - low`
    ///   (this includes the empty range `low == high`)
    /// - [`RandomError::RangeExhausted`] when the distinct blacklisted values
    ///   cover the whole range
    pub fn random_int_not_in_blacklist(
        &mut self,
        blacklist: &[i32],
        low: i32,
        high: i32,
    ) -> Result<i32> {
        if low > high {
            return Err(RandomError::InvertedRange { low, high });
        }

        let range_size = i64::from(high) - i64::from(low);
        let blacklist_len = i64::try_from(blacklist.len()).unwrap_or(i64::MAX);
        if blacklist_len >= range_size {
            return Err(RandomError::BlacklistTooLarge {
                blacklist_len: blacklist.len(),
                range_size,
            });
        }

        let excluded: HashSet<i32> = blacklist
            .iter()
            .copied()
            .filter(|value| (low..high).contains(value))
            .collect();
        let excluded_len = i64::try_from(excluded.len()).unwrap_or(i64::MAX);
        if excluded_len >= range_size {
            return Err(RandomError::RangeExhausted { low, high });
        }

        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            let candidate = self.random_int(low, high);
            if !excluded.contains(&candidate) {
                trace!(low, high, attempts, value = candidate, "blacklist draw accepted");
                return Ok(candidate);
            }
        }
    }
}

impl RngCore for RandomEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl fmt::Debug for RandomEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomEngine")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
