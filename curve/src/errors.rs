//! Error types for field and curve operations.

use thiserror::Error;

/// Errors that can occur during field arithmetic, point construction and
/// SEC point serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// An operand passed to a field operation was outside `[0, p-1]`.
    #[error("value is not in field")]
    ValueNotInField,

    /// The coordinates do not satisfy `y^2 = x^3 + ax + b`.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// Square roots are only implemented for primes with `p % 4 == 3`.
    #[error("no sqrt algorithm for this field")]
    SqrtUnsupported,

    /// Zero has no multiplicative inverse, so a negative exponent on a
    /// zero base is undefined.
    #[error("inverse of zero is undefined")]
    ZeroInverse,

    /// A secret scalar was zero or not below the group order.
    #[error("invalid secret")]
    InvalidSecret,

    /// An SEC encoded point started with a byte other than 0x02/0x03/0x04.
    #[error("bad SEC prefix")]
    BadPrefix,

    /// An SEC encoded point had the wrong length for its prefix.
    #[error("bad SEC length")]
    BadLength,

    /// The point at infinity has no SEC encoding.
    #[error("point at infinity cannot be encoded")]
    InfinityNotEncodable,
}
