//! Numeric trait bounding the coordinate type of the generic group law.

use num_bigint::{BigInt, BigUint};

/// Arithmetic surface the chord-and-tangent formulas need from a
/// coordinate type.
///
/// The group law in [`crate::Point`] is written once against this trait, so
/// the same code serves any field whose elements can implement it. All
/// operations are value-producing; implementations are expected to be
/// immutable.
///
/// Binary operations may panic when the operands belong to different fields.
/// That is a programming error on the caller's side, not a runtime
/// condition to recover from.
pub trait Operand: Sized + Clone + PartialEq {
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn div(&self, other: &Self) -> Self;
    fn pow(&self, exp: &BigInt) -> Self;
    fn neg(&self) -> Self;

    /// Multiplication by a plain integer scalar.
    fn smul(&self, k: &BigUint) -> Self;

    fn is_even(&self) -> bool;
    fn is_zero(&self) -> bool;
}
