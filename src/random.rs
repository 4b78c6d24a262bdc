//! Uniform random numbers from a shared, lazily created generator.
//!
//! Three layers, from most to least explicit:
//!
//! - [`sample_float`] / [`sample_int`] draw from any caller-owned `Rng`.
//! - [`RandomSource`] owns a mutex-guarded generator and can be shared
//!   across threads or injected into code under test.
//! - The free functions ([`rand_float`], [`rand_int`], [`roll_die`], ...)
//!   use one process-wide [`RandomSource`] returned by [`global`].
//!
//! # Lifecycle of the shared generator
//!
//! The shared source is created on first use and lives for the rest of the
//! process. It is seeded from OS entropy unless [`init_global`] installed a
//! fixed seed before that first use. It is never reseeded.
//!
//! # Reproducibility
//!
//! For reproducible sequences use [`create_rng`] or
//! [`RandomSource::seeded`]. The underlying algorithm (SmallRng) is
//! deterministic for a given seed on the same platform.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Default lower bound of [`rand_float`] in the classic API.
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;
/// Default upper bound of [`rand_float`] in the classic API.
pub const DEFAULT_FLOAT_MAX: f64 = 1.0;
/// Default lower bound of [`rand_int`] in the classic API.
pub const DEFAULT_INT_MIN: i32 = 0;
/// Default upper bound of [`rand_int`] in the classic API.
pub const DEFAULT_INT_MAX: i32 = 100;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_basics::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

// ============================================================================
// Samplers over any Rng
// ============================================================================

/// Uniform `f64` in the closed interval `[min, max]`.
///
/// # Returns
/// - `f64::NAN` if either bound is NaN or infinite, or the width
///   `max − min` overflows `f64`.
/// - Inverted bounds are swapped, so `sample_float(rng, 5.0, 1.0)` draws
///   from `[1, 5]`.
/// - `min` when `min == max`.
///
/// # Examples
/// ```
/// use u_basics::random::{create_rng, sample_float};
/// let mut rng = create_rng(7);
/// let x = sample_float(&mut rng, -2.0, 2.0);
/// assert!((-2.0..=2.0).contains(&x));
/// ```
pub fn sample_float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return f64::NAN;
    }
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if !(high - low).is_finite() {
        return f64::NAN;
    }
    rng.random_range(low..=high)
}

/// Uniform `i32` in the closed interval `[min, max]`.
///
/// Inverted bounds are swapped.
///
/// # Examples
/// ```
/// use u_basics::random::{create_rng, sample_int};
/// let mut rng = create_rng(7);
/// let n = sample_int(&mut rng, 1, 6);
/// assert!((1..=6).contains(&n));
/// ```
pub fn sample_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(low..=high)
}

fn check_float_range(min: f64, max: f64) -> Result<()> {
    let finite = min.is_finite() && max.is_finite() && (max - min).is_finite();
    if !finite || min > max {
        tracing::trace!(min, max, "rejected random float range");
        return Err(Error::InvalidRange { min, max });
    }
    Ok(())
}

fn check_int_range(min: i32, max: i32) -> Result<()> {
    if min > max {
        tracing::trace!(min, max, "rejected random int range");
        return Err(Error::InvalidRange {
            min: f64::from(min),
            max: f64::from(max),
        });
    }
    Ok(())
}

// ============================================================================
// RandomSource
// ============================================================================

/// A thread-safe random source.
///
/// Every draw locks the inner generator for the duration of one sample, so
/// a single source may be shared freely between threads.
///
/// # Examples
/// ```
/// use u_basics::random::RandomSource;
/// let a = RandomSource::seeded(1);
/// let b = RandomSource::seeded(1);
/// assert_eq!(a.rand_int(0, 1000), b.rand_int(0, 1000));
/// assert!((1..=6).contains(&a.roll_die()));
/// ```
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<SmallRng>,
}

impl RandomSource {
    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Deterministic source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(create_rng(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    // Poisoned locks still hold a valid generator.
    fn lock(&self) -> MutexGuard<'_, SmallRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform `f64` in `[min, max]`; see [`sample_float`] for bound
    /// handling.
    pub fn rand_float(&self, min: f64, max: f64) -> f64 {
        sample_float(&mut *self.lock(), min, max)
    }

    /// Uniform `i32` in `[min, max]`; inverted bounds are swapped.
    pub fn rand_int(&self, min: i32, max: i32) -> i32 {
        sample_int(&mut *self.lock(), min, max)
    }

    /// Strict variant of [`rand_float`](Self::rand_float).
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if a bound is not finite or `min > max`.
    pub fn try_rand_float(&self, min: f64, max: f64) -> Result<f64> {
        check_float_range(min, max)?;
        Ok(self.rand_float(min, max))
    }

    /// Strict variant of [`rand_int`](Self::rand_int).
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `min > max`.
    pub fn try_rand_int(&self, min: i32, max: i32) -> Result<i32> {
        check_int_range(min, max)?;
        Ok(self.rand_int(min, max))
    }

    /// `true` with probability 1/2, as `rand_int(0, 1) != 0`.
    pub fn random_bool(&self) -> bool {
        self.rand_int(0, 1) != 0
    }

    /// Uniform `f64` in `[0, 1]`.
    pub fn random_unit(&self) -> f64 {
        self.rand_float(DEFAULT_FLOAT_MIN, DEFAULT_FLOAT_MAX)
    }

    /// Uniform integer in `[0, 100]`.
    pub fn random_percent(&self) -> i32 {
        self.rand_int(DEFAULT_INT_MIN, DEFAULT_INT_MAX)
    }

    /// A six-sided die roll in `[1, 6]`.
    pub fn roll_die(&self) -> i32 {
        self.rand_int(1, 6)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

// ============================================================================
// Shared Source
// ============================================================================

static GLOBAL: OnceLock<RandomSource> = OnceLock::new();

/// The process-wide source, created from entropy on first use.
pub fn global() -> &'static RandomSource {
    GLOBAL.get_or_init(|| {
        tracing::debug!("initializing shared random source from OS entropy");
        RandomSource::from_entropy()
    })
}

/// Seeds the process-wide source, which must not have been used yet.
///
/// # Errors
/// [`Error::GeneratorAlreadyInitialized`] if [`global`] (or any free
/// function in this module) already ran, or if `init_global` was already
/// called.
///
/// # Examples
/// ```
/// use u_basics::random::{init_global, roll_die};
/// init_global(42).expect("first use of the shared source");
/// assert!((1..=6).contains(&roll_die()));
/// assert!(init_global(7).is_err());
/// ```
pub fn init_global(seed: u64) -> Result<&'static RandomSource> {
    let mut installed = false;
    let source = GLOBAL.get_or_init(|| {
        installed = true;
        tracing::debug!(seed, "initializing shared random source with fixed seed");
        RandomSource::seeded(seed)
    });
    if installed {
        Ok(source)
    } else {
        Err(Error::GeneratorAlreadyInitialized)
    }
}

/// Uniform `f64` in `[min, max]` from the shared source.
pub fn rand_float(min: f64, max: f64) -> f64 {
    global().rand_float(min, max)
}

/// Uniform `i32` in `[min, max]` from the shared source.
pub fn rand_int(min: i32, max: i32) -> i32 {
    global().rand_int(min, max)
}

/// Fair coin flip from the shared source.
pub fn random_bool() -> bool {
    global().random_bool()
}

/// Uniform `f64` in `[0, 1]` from the shared source.
pub fn random_unit() -> f64 {
    global().random_unit()
}

/// Uniform integer in `[0, 100]` from the shared source.
pub fn random_percent() -> i32 {
    global().random_percent()
}

/// A die roll in `[1, 6]` from the shared source.
pub fn roll_die() -> i32 {
    global().roll_die()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = RandomSource::seeded(99);
        let b = RandomSource::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.rand_int(-1000, 1000), b.rand_int(-1000, 1000));
            assert_eq!(a.rand_float(-1.0, 1.0), b.rand_float(-1.0, 1.0));
        }
    }

    #[test]
    fn test_rand_int_in_range() {
        let source = RandomSource::seeded(123);
        for _ in 0..10_000 {
            let n = source.rand_int(-5, 5);
            assert!((-5..=5).contains(&n), "out of range: {n}");
        }
    }

    #[test]
    fn test_rand_int_hits_both_ends() {
        let source = RandomSource::seeded(5);
        let draws: Vec<i32> = (0..1_000).map(|_| source.rand_int(0, 3)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_rand_float_in_range() {
        let source = RandomSource::seeded(123);
        for _ in 0..10_000 {
            let x = source.rand_float(2.5, 7.5);
            assert!((2.5..=7.5).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn test_degenerate_range() {
        let source = RandomSource::seeded(0);
        assert_eq!(source.rand_int(4, 4), 4);
        assert_eq!(source.rand_float(1.5, 1.5), 1.5);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let source = RandomSource::seeded(8);
        for _ in 0..1_000 {
            assert!((1..=6).contains(&source.rand_int(6, 1)));
            assert!((1.0..=6.0).contains(&source.rand_float(6.0, 1.0)));
        }
    }

    #[test]
    fn test_non_finite_float_bounds() {
        let source = RandomSource::seeded(8);
        assert!(source.rand_float(f64::NAN, 1.0).is_nan());
        assert!(source.rand_float(0.0, f64::INFINITY).is_nan());
        assert!(source.rand_float(-f64::MAX, f64::MAX).is_nan());
    }

    #[test]
    fn test_try_variants() {
        let source = RandomSource::seeded(3);
        assert!(source.try_rand_int(1, 6).is_ok());
        assert_eq!(
            source.try_rand_int(6, 1),
            Err(Error::InvalidRange { min: 6.0, max: 1.0 })
        );
        assert!(source.try_rand_float(0.0, 1.0).is_ok());
        assert!(source.try_rand_float(1.0, 0.0).is_err());
        assert!(source.try_rand_float(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_aliases() {
        let source = RandomSource::seeded(11);
        for _ in 0..1_000 {
            assert!((1..=6).contains(&source.roll_die()));
            assert!((0.0..=1.0).contains(&source.random_unit()));
            assert!((0..=100).contains(&source.random_percent()));
        }
    }

    #[test]
    fn test_roll_die_covers_all_faces() {
        let source = RandomSource::seeded(2024);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(source.roll_die() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_bool_is_fair() {
        let source = RandomSource::seeded(42);
        let n = 10_000;
        let heads = (0..n).filter(|_| source.random_bool()).count();
        let ratio = heads as f64 / n as f64;
        assert!((ratio - 0.5).abs() < 0.03, "expected ~0.5, got {ratio}");
    }

    #[test]
    fn test_source_shared_across_threads() {
        let source = Arc::new(RandomSource::seeded(77));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    (0..1_000).all(|_| (1..=6).contains(&source.roll_die()))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_global_free_functions_in_range() {
        for _ in 0..1_000 {
            assert!((1..=6).contains(&roll_die()));
            assert!((10..=20).contains(&rand_int(10, 20)));
            assert!((0.0..=1.0).contains(&random_unit()));
            assert!((-1.0..=1.0).contains(&rand_float(-1.0, 1.0)));
            assert!((0..=100).contains(&random_percent()));
        }
        let _ = random_bool();
    }

    #[test]
    fn test_global_is_created_once() {
        let a: *const RandomSource = global();
        let b: *const RandomSource = global();
        assert_eq!(a, b);
        // the shared source exists by now, so seeding it is refused
        assert_eq!(init_global(1).err(), Some(Error::GeneratorAlreadyInitialized));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sample_int_within_bounds(
            seed in 0_u64..10000,
            a in -1_000_000_i32..1_000_000,
            b in -1_000_000_i32..1_000_000,
        ) {
            let mut rng = create_rng(seed);
            let n = sample_int(&mut rng, a, b);
            prop_assert!(a.min(b) <= n && n <= a.max(b));
        }

        #[test]
        fn sample_float_within_bounds(
            seed in 0_u64..10000,
            a in -1e9_f64..1e9,
            b in -1e9_f64..1e9,
        ) {
            let mut rng = create_rng(seed);
            let x = sample_float(&mut rng, a, b);
            prop_assert!(a.min(b) <= x && x <= a.max(b), "{} not in [{}, {}]", x, a, b);
        }
    }
}
