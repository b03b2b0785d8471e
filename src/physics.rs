// ============================================================================
// Physics Helpers
// Mass-energy equivalence over the decimal-safe multiply
// ============================================================================

use crate::constants::C;
use crate::numeric::multiply;

/// Energy in joules of `mass` kilograms at rest, E = mc².
///
/// A one-line composition over [`multiply`]; an integer mass passes
/// through the scaling unchanged, so `energy(1.0)` is exactly `C * C`.
#[inline]
pub fn energy(mass: f64) -> f64 {
    multiply(mass, C * C)
}
