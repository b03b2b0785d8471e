// ============================================================================
// Display Rounding
// Exponential-shift rounding for UI output
// ============================================================================

/// Decimal places used by [`round_default`].
pub const DEFAULT_DECIMALS: u32 = 4;

/// Round `num` to `decimals` decimal places for display.
///
/// The shift happens through the value's decimal string form rather than a
/// multiply: `num` is reformatted as `"{num}e{decimals}"`, parsed back,
/// rounded half away from zero, and shifted back the same way. Going
/// through the string avoids the binary artifact that makes
/// `(1.005 * 100.0).round()` yield 100 instead of 101.
///
/// Halfway values therefore round away from zero: `round_to(1.005, 2)` is
/// `1.01` and `round_to(-1.005, 2)` is `-1.01`.
///
/// Non-finite input yields the NaN sentinel.
///
/// # Example
/// ```
/// use coremath::format::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// ```
#[inline]
pub fn round_to(num: f64, decimals: u32) -> f64 {
    let shifted: f64 = match format!("{num}e{decimals}").parse() {
        Ok(v) => v,
        Err(_) => return f64::NAN,
    };
    format!("{}e-{}", shifted.round(), decimals)
        .parse()
        .unwrap_or(f64::NAN)
}

/// [`round_to`] with [`DEFAULT_DECIMALS`] places.
#[inline]
pub fn round_default(num: f64) -> f64 {
    round_to(num, DEFAULT_DECIMALS)
}
