// ============================================================================
// Decimal-Safe Arithmetic
// Scales operands to integers before combining them, then rescales
// ============================================================================
//
// Binary floating point cannot represent most decimal fractions exactly,
// so operating on them directly accumulates representation error
// (0.1 + 0.2 != 0.3). Each operation here converts its operands into an
// integer domain sized to their actual decimal precision, combines them
// there, and converts back. This keeps results exact for human-entered
// decimal quantities without an arbitrary-precision number type.

use super::digits::fraction_digits;

/// 10^digits as an f64 scale factor.
#[inline]
fn scale_factor(digits: u32) -> f64 {
    10f64.powi(digits as i32)
}

/// Operand with its decimal separator stripped, as an integer-valued f64.
///
/// "12.34" becomes 1234, "-0.5" becomes -5. The parse cannot fail for a
/// finite operand; anything else degrades to the NaN sentinel.
#[inline]
fn strip_separator(x: f64) -> f64 {
    x.to_string().replace('.', "").parse().unwrap_or(f64::NAN)
}

/// Decimal-safe addition.
///
/// Both operands are scaled by 10^max(digits(a), digits(b)), rounded to
/// integers, summed, and rescaled. Exact for operands whose combined decimal
/// representation stays within f64's integer-exact range (~15 significant
/// digits together with the scale factor).
///
/// # Example
/// ```
/// use coremath::numeric::add;
///
/// assert_eq!(add(0.1, 0.2), 0.3); // not 0.30000000000000004
/// ```
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    let scale = scale_factor(fraction_digits(a).max(fraction_digits(b)));
    ((a * scale).round() + (b * scale).round()) / scale
}

/// Decimal-safe subtraction.
///
/// Same shared-scale scheme as [`add`], with subtraction in place of
/// addition.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    let scale = scale_factor(fraction_digits(a).max(fraction_digits(b)));
    ((a * scale).round() - (b * scale).round()) / scale
}

/// Decimal-safe multiplication.
///
/// Each operand is scaled independently by its own digit count and the two
/// scaled integers are multiplied, then the product is rescaled by the
/// combined factor. Multiplication's error sources compound per operand,
/// not per sum, so the shared scale of [`add`]/[`subtract`] does not apply.
///
/// # Example
/// ```
/// use coremath::numeric::multiply;
///
/// assert_eq!(multiply(0.1, 0.2), 0.02);
/// ```
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    let a_digits = fraction_digits(a);
    let b_digits = fraction_digits(b);
    let scaled = (a * scale_factor(a_digits)).round() * (b * scale_factor(b_digits)).round();
    scaled / scale_factor(a_digits + b_digits)
}

/// Decimal-safe division.
///
/// A zero divisor returns the NaN sentinel rather than panicking; callers
/// must check the result with [`f64::is_nan`] before using it. Otherwise
/// the decimal separator is stripped from each operand's string form to
/// obtain two integers, which are divided and rescaled by
/// 10^(digits(b) - digits(a)) to restore the decimal magnitude.
///
/// # Example
/// ```
/// use coremath::numeric::divide;
///
/// assert_eq!(divide(0.3, 0.1), 3.0); // not 2.9999999999999996
/// assert!(divide(5.0, 0.0).is_nan());
/// ```
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        tracing::debug!(dividend = a, "division by zero, returning NaN sentinel");
        return f64::NAN;
    }
    let a_digits = fraction_digits(a);
    let b_digits = fraction_digits(b);
    let a_int = strip_separator(a);
    let b_int = strip_separator(b);
    (a_int / b_int) * 10f64.powi(b_digits as i32 - a_digits as i32)
}
