// ============================================================================
// CoreMath Library
// Decimal-safe arithmetic, scientific constants and display rounding
// ============================================================================

//! # CoreMath
//!
//! A small set of decimal-safe arithmetic helpers for human-entered decimal
//! quantities, plus scientific constants, Unicode symbol strings, a
//! display-rounding formatter and a mass-energy convenience function.
//!
//! ## The core idea
//!
//! Binary floating point cannot represent most decimal fractions exactly,
//! which is why `0.1 + 0.2` is `0.30000000000000004` in plain `f64`
//! arithmetic. The [`numeric`] operations derive each operand's decimal
//! precision from its string form, scale both into an integer domain sized
//! to that precision, combine them there, and rescale. No
//! arbitrary-precision number type is involved.
//!
//! ## Example
//!
//! ```rust
//! use coremath::prelude::*;
//!
//! // Exact decimal addition
//! assert_eq!(add(0.1, 0.2), 0.3);
//!
//! // Division by zero returns the NaN sentinel; check before use
//! assert!(divide(5.0, 0.0).is_nan());
//!
//! // Mass-energy equivalence with the exact speed of light
//! assert_eq!(energy(1.0), C * C);
//!
//! // Display rounding
//! assert_eq!(round_to(1.23456, 2), 1.23);
//! println!("{} {}{}", round_to(36.61234, 1), symbols::DEGREE, symbols::PLUS_MINUS);
//! ```
//!
//! Every function is pure and synchronous; the constant table is read-only
//! process-wide state. Calls may be issued concurrently from any number of
//! threads without synchronization.

pub mod constants;
pub mod format;
pub mod numeric;
pub mod physics;

// Re-exports for convenience
pub mod prelude {
    pub use crate::constants::symbols;
    pub use crate::constants::{C, E, LN10, PHI, PI, SQRT2};
    pub use crate::format::{round_default, round_to, DEFAULT_DECIMALS};
    pub use crate::numeric::{add, divide, fraction_digits, multiply, subtract};
    pub use crate::physics::energy;
}
