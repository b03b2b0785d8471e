// ============================================================================
// Unicode Symbols
// Fixed glyph strings for display output
// ============================================================================

/// Degree sign, °.
pub const DEGREE: &str = "\u{00B0}";

/// Plus-minus sign, ±.
pub const PLUS_MINUS: &str = "\u{00B1}";

/// Micro sign, µ.
pub const MICRO: &str = "\u{00B5}";

/// Greek small theta, θ.
pub const THETA: &str = "\u{03B8}";

/// Greek capital delta, Δ.
pub const DELTA: &str = "\u{0394}";

/// Infinity, ∞.
pub const INFINITY: &str = "\u{221E}";

/// Approximately equal, ≈.
pub const APPROX: &str = "\u{2248}";

/// N-ary summation, ∑.
pub const SUM: &str = "\u{2211}";

/// Greek small pi, π.
pub const PI_SYM: &str = "\u{03C0}";
