//! Common mathematical constants at full `f64` precision.

/// Archimedes' constant π.
pub const PI: f64 = std::f64::consts::PI;

/// τ = 2π.
pub const TAU: f64 = std::f64::consts::TAU;

/// Euler's number e.
pub const E: f64 = std::f64::consts::E;

/// Golden ratio φ = (1 + √5) / 2 ≈ 1.6180339887498949
pub const PHI: f64 = 1.618_033_988_749_894_8;

/// √2.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// ln 2.
pub const LN_2: f64 = std::f64::consts::LN_2;

/// ln 10.
pub const LN_10: f64 = std::f64::consts::LN_10;
