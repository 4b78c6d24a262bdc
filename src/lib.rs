//! # u-basics
//!
//! Elementary utilities for the U-Engine ecosystem.
//!
//! This crate collects the small helpers that every program ends up
//! writing: arithmetic and unit conversions, an iterative n-th root,
//! ASCII string helpers with naive substring search, and a shared uniform
//! random source. It has no domain knowledge and no I/O.
//!
//! ## Modules
//!
//! - [`constants`] — π, τ, e, φ, √2, ln 2, ln 10
//! - [`numeric`] — Arithmetic, roots, logarithms, trigonometry, parity,
//!   length and temperature conversions
//! - [`text`] — Case mapping, join/clear, substring search, palindrome and
//!   anagram checks
//! - [`random`] — Seeded and shared uniform integer/float generation
//! - [`error`] — Error type for the checked API
//!
//! ## Design Philosophy
//!
//! - **Sentinels first**: the plain functions never fail and report
//!   problems as `-1`, `(-1, -1)`, NaN or ±∞
//! - **Checked alternatives**: `try_*` / `checked_*` / `find_*` return
//!   `Result` or `Option` for callers that want an explicit failure
//! - **Property-based testing**: invariants verified via proptest

pub mod constants;
pub mod error;
pub mod numeric;
pub mod random;
pub mod text;

pub use error::{Error, Result};
pub use text::{Case, SubstringRange};
