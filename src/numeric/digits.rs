// ============================================================================
// Decimal Digit Counting
// Derives an operand's decimal precision from its canonical string form
// ============================================================================

/// Number of digits after the decimal separator in the canonical
/// string representation of `x`.
///
/// The count is derived from `Display` output at call time, not stored:
/// `f64` formatting produces the shortest decimal string that round-trips,
/// so the result reflects the precision the value was written with rather
/// than its full binary expansion.
///
/// Returns 0 when the representation carries no separator: integers,
/// negative zero, NaN and the infinities.
///
/// # Example
/// ```
/// use coremath::numeric::fraction_digits;
///
/// assert_eq!(fraction_digits(0.1), 1);
/// assert_eq!(fraction_digits(12.345), 3);
/// assert_eq!(fraction_digits(42.0), 0);
/// ```
#[inline]
pub fn fraction_digits(x: f64) -> u32 {
    let s = x.to_string();
    match s.find('.') {
        Some(dot) => (s.len() - dot - 1) as u32,
        None => 0,
    }
}
