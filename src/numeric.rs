//! Elementary numeric operations.
//!
//! Arithmetic, powers and roots, logarithms, trigonometry, parity and
//! unit conversions over `f64`.
//!
//! # Failure reporting
//!
//! The plain functions follow IEEE-754 semantics and never fail: division
//! by zero yields ±∞ or NaN, a logarithm outside its domain yields NaN or
//! ±∞, and a root that cannot be found yields NaN. Where a caller wants an
//! explicit error instead, use [`checked_divide`], [`checked_logarithm`] or
//! [`try_nth_root`].

use crate::constants::PI;
use crate::error::{Error, Result};

// ============================================================================
// Arithmetic
// ============================================================================

/// Returns `a + b`.
#[inline]
pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a − b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a · b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `numerator / denominator`.
///
/// No zero check: `x / 0.0` is `±∞` for `x ≠ 0` and NaN for `0 / 0`.
///
/// # Examples
/// ```
/// use u_basics::numeric::divide;
/// assert_eq!(divide(7.0, 2.0), 3.5);
/// assert_eq!(divide(1.0, 0.0), f64::INFINITY);
/// assert!(divide(0.0, 0.0).is_nan());
/// ```
#[inline]
pub fn divide(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

/// Division that rejects a zero denominator.
///
/// # Errors
/// [`Error::DivisionByZero`] if `denominator == 0.0` (either sign).
pub fn checked_divide(numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        tracing::trace!(numerator, "rejected division by zero");
        return Err(Error::DivisionByZero { numerator });
    }
    Ok(numerator / denominator)
}

/// Returns `base` raised to `exponent`.
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root; NaN for negative input.
#[inline]
pub fn square_root(value: f64) -> f64 {
    value.sqrt()
}

/// Absolute value.
#[inline]
pub fn absolute_value(value: f64) -> f64 {
    value.abs()
}

// ============================================================================
// N-th Root (Newton-Raphson)
// ============================================================================

/// Settings for the Newton-Raphson root finder behind [`nth_root`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinderConfig {
    /// Iteration stops once `|Δx|` drops below this value.
    pub tolerance: f64,
    /// Upper bound on iterations before giving up.
    pub max_iterations: usize,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1_000,
        }
    }
}

impl RootFinderConfig {
    /// Checks that the tolerance is finite and positive and that at least
    /// one iteration is allowed.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "tolerance",
                reason: format!("must be finite and positive, got {}", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig {
                field: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Computes the `root`-th root of `value` with the default
/// [`RootFinderConfig`].
///
/// # Algorithm
/// Newton-Raphson on `f(x) = xⁿ − value`, starting from `value / 2` and
/// stopping once the step magnitude falls below the tolerance:
///
/// ```text
/// x ← x − (xⁿ − value) / (n · xⁿ⁻¹)
/// ```
///
/// # Returns
/// - `0.0` for `value == 0.0` (the starting point is already a root).
/// - `f64::NAN` when the iteration does not converge: `root == 0`, an even
///   root of a negative value, or a start too far out for `f64`.
///
/// # Examples
/// ```
/// use u_basics::numeric::nth_root;
/// assert!((nth_root(3.0, 27.0) - 3.0).abs() < 1e-4);
/// assert!((nth_root(2.0, 27.0) - 5.196152).abs() < 1e-4);
/// assert!((nth_root(3.0, -8.0) + 2.0).abs() < 1e-4);
/// ```
pub fn nth_root(root: f64, value: f64) -> f64 {
    nth_root_with(&RootFinderConfig::default(), root, value)
}

/// [`nth_root`] with an explicit configuration.
pub fn nth_root_with(config: &RootFinderConfig, root: f64, value: f64) -> f64 {
    match newton_root(config, root, value) {
        Ok(x) => x,
        Err(iterations) => {
            tracing::warn!(root, value, iterations, "nth_root did not converge");
            f64::NAN
        }
    }
}

/// Strict variant of [`nth_root`].
///
/// # Errors
/// - [`Error::InvalidRootDegree`] if `root` is zero or not finite.
/// - [`Error::EvenRootOfNegative`] if `value < 0` and `root` is not an odd
///   integer.
/// - [`Error::NoConvergence`] if the iteration budget runs out.
///
/// # Examples
/// ```
/// use u_basics::numeric::try_nth_root;
/// use u_basics::Error;
/// assert!((try_nth_root(4.0, 16.0).unwrap() - 2.0).abs() < 1e-6);
/// assert!(matches!(try_nth_root(2.0, -4.0), Err(Error::EvenRootOfNegative { .. })));
/// assert!(matches!(try_nth_root(0.0, 4.0), Err(Error::InvalidRootDegree(_))));
/// ```
pub fn try_nth_root(root: f64, value: f64) -> Result<f64> {
    try_nth_root_with(&RootFinderConfig::default(), root, value)
}

/// [`try_nth_root`] with an explicit configuration.
///
/// # Errors
/// As [`try_nth_root`], plus [`Error::InvalidConfig`] for a bad `config`.
pub fn try_nth_root_with(config: &RootFinderConfig, root: f64, value: f64) -> Result<f64> {
    config.validate()?;
    if root == 0.0 || !root.is_finite() {
        tracing::trace!(root, "rejected root degree");
        return Err(Error::InvalidRootDegree(root));
    }
    if value < 0.0 && !is_odd_integer(root) {
        tracing::trace!(root, value, "rejected even root of negative value");
        return Err(Error::EvenRootOfNegative { root, value });
    }
    newton_root(config, root, value).map_err(|iterations| Error::NoConvergence { iterations })
}

/// Runs the iteration. `Err` carries the number of iterations spent.
fn newton_root(
    config: &RootFinderConfig,
    root: f64,
    value: f64,
) -> std::result::Result<f64, usize> {
    if value == 0.0 && root > 0.0 {
        return Ok(0.0);
    }

    let mut x = value / 2.0;
    for iteration in 1..=config.max_iterations {
        let fx = x.powf(root) - value;
        let fpx = root * x.powf(root - 1.0);
        let dx = fx / fpx;
        x -= dx;
        if dx.abs() < config.tolerance {
            return Ok(x);
        }
        // NaN never recovers
        if !x.is_finite() {
            return Err(iteration);
        }
    }
    Err(config.max_iterations)
}

fn is_odd_integer(x: f64) -> bool {
    x.fract() == 0.0 && (x % 2.0).abs() == 1.0
}

// ============================================================================
// Logarithm
// ============================================================================

/// Logarithm of `value` in an arbitrary `base`, as `ln(value) / ln(base)`.
///
/// # Returns
/// NaN or ±∞ when `value ≤ 0`, `base ≤ 0` or `base == 1`, following the
/// natural logarithm.
///
/// # Examples
/// ```
/// use u_basics::numeric::logarithm;
/// assert!((logarithm(2.0, 1024.0) - 10.0).abs() < 1e-12);
/// assert!(logarithm(10.0, -1.0).is_nan());
/// ```
#[inline]
pub fn logarithm(base: f64, value: f64) -> f64 {
    value.ln() / base.ln()
}

/// Strict variant of [`logarithm`].
///
/// # Errors
/// [`Error::InvalidLogarithm`] if `value ≤ 0`, `base ≤ 0`, `base == 1`,
/// or either argument is NaN.
pub fn checked_logarithm(base: f64, value: f64) -> Result<f64> {
    let valid = value > 0.0 && base > 0.0 && base != 1.0;
    if !valid {
        tracing::trace!(base, value, "rejected logarithm arguments");
        return Err(Error::InvalidLogarithm { base, value });
    }
    Ok(logarithm(base, value))
}

// ============================================================================
// Trigonometry
// ============================================================================

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Sine of an angle in radians.
#[inline]
pub fn sine(radians: f64) -> f64 {
    radians.sin()
}

/// Cosine of an angle in radians.
#[inline]
pub fn cosine(radians: f64) -> f64 {
    radians.cos()
}

/// Tangent of an angle in radians.
#[inline]
pub fn tangent(radians: f64) -> f64 {
    radians.tan()
}

// ============================================================================
// Parity and Digits
// ============================================================================

/// Parity test after rounding to the nearest integer.
///
/// `value` is first rounded half away from zero, so `4.4` counts as even
/// (→ 4) while `4.5` and `4.6` count as odd (→ 5).
///
/// # Returns
/// `false` for NaN and ±∞.
///
/// # Examples
/// ```
/// use u_basics::numeric::is_even;
/// assert!(is_even(4.0));
/// assert!(!is_even(4.6));
/// assert!(is_even(-2.2));
/// ```
pub fn is_even(value: f64) -> bool {
    value.round() % 2.0 == 0.0
}

/// Whether the decimal digits of `n` read the same in both directions.
///
/// The check runs over `n.to_string()`, so the leading `-` of a negative
/// number never matches its last digit: negative numbers are never
/// palindromes.
///
/// # Examples
/// ```
/// use u_basics::numeric::is_palindrome_int;
/// assert!(is_palindrome_int(12321));
/// assert!(!is_palindrome_int(1232));
/// assert!(!is_palindrome_int(-121));
/// ```
pub fn is_palindrome_int(n: i64) -> bool {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let (mut left, mut right) = (0, bytes.len() - 1);
    while right > left {
        if bytes[left] != bytes[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

// ============================================================================
// Unit Conversions
// ============================================================================

/// International foot in meters.
const METERS_PER_FOOT: f64 = 0.3048;

/// Feet per meter (1 / 0.3048, as published).
const FEET_PER_METER: f64 = 3.280839895;

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Absolute zero in °F, negated.
const RANKINE_OFFSET: f64 = 459.67;

/// Feet → meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Meters → feet.
#[inline]
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// °C → °F: `9/5 · C + 32`.
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    9.0 / 5.0 * celsius + 32.0
}

/// °F → °C: `5/9 · (F − 32)`.
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    5.0 / 9.0 * (fahrenheit - 32.0)
}

/// °C → K.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// K → °C.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// °F → K: `5/9 · (F + 459.67)`.
#[inline]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    5.0 / 9.0 * (fahrenheit + RANKINE_OFFSET)
}

/// K → °F: `9/5 · K − 459.67`.
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    9.0 / 5.0 * kelvin - RANKINE_OFFSET
}

// ============================================================================
// Tests
// ============================================================================
