//! Error type for the checked (`try_*` / `checked_*`) entry points.
//!
//! The plain functions in this crate never fail: they report problems with
//! sentinel values (`-1`, `(-1, -1)`, NaN, ±∞). The variants below are what
//! the stricter alternatives return instead.

use thiserror::Error;

/// Errors returned by the checked operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Denominator was exactly zero.
    #[error("division by zero: {numerator} / 0")]
    DivisionByZero {
        /// Numerator of the rejected division.
        numerator: f64,
    },

    /// Logarithm with a value ≤ 0, a base ≤ 0, a base of 1, or NaN input.
    #[error("logarithm undefined for base {base} and value {value}")]
    InvalidLogarithm {
        /// Requested base.
        base: f64,
        /// Requested argument.
        value: f64,
    },

    /// Root degree of zero or a non-finite degree.
    #[error("invalid root degree {0}")]
    InvalidRootDegree(f64),

    /// Even (or non-integer) root of a negative number has no real value.
    #[error("no real {root}-th root of negative value {value}")]
    EvenRootOfNegative {
        /// Root degree.
        root: f64,
        /// Negative radicand.
        value: f64,
    },

    /// Newton iteration did not reach the tolerance.
    #[error("root finder did not converge after {iterations} iterations")]
    NoConvergence {
        /// Iterations spent before giving up.
        iterations: usize,
    },

    /// A configuration field is out of range.
    #[error("invalid configuration '{field}': {reason}")]
    InvalidConfig {
        /// Field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Random range with inverted or non-finite bounds.
    #[error("invalid random range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// The shared generator was already created, so it cannot be seeded.
    #[error("shared random generator is already initialized")]
    GeneratorAlreadyInitialized,
}

/// Result alias for the checked operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DivisionByZero { numerator: 3.0 };
        assert_eq!(err.to_string(), "division by zero: 3 / 0");

        let err = Error::NoConvergence { iterations: 1000 };
        assert!(err.to_string().contains("1000 iterations"));

        let err = Error::InvalidConfig {
            field: "tolerance",
            reason: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("tolerance"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::GeneratorAlreadyInitialized);
    }
}
