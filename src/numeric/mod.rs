// ============================================================================
// Numeric Module
// Decimal-safe arithmetic over f64 operands
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide: pure decimal-safe operations
// - fraction_digits: string-derived decimal precision of an operand
//
// Design principles:
// - Every operation is pure; no shared state, no I/O
// - Scale to integers sized to the operands' decimal precision, operate,
//   rescale
// - The only explicit failure path is divide-by-zero, signalled by the NaN
//   sentinel rather than an error return

mod digits;
mod ops;

pub use digits::fraction_digits;
pub use ops::{add, divide, multiply, subtract};
