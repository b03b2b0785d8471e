// ============================================================================
// Constants Module
// Scientific constants and Unicode symbol strings
// ============================================================================
//
// Read-only process-wide values, safe for unsynchronized concurrent reads
// by construction.

pub mod symbols;

/// Archimedes' constant, π.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number, e.
pub const E: f64 = std::f64::consts::E;

/// Natural logarithm of 10.
pub const LN10: f64 = std::f64::consts::LN_10;

/// Square root of 2.
pub const SQRT2: f64 = std::f64::consts::SQRT_2;

/// Golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618033988749895;

/// Speed of light in vacuum, m/s (exact by definition).
pub const C: f64 = 299_792_458.0;
