//! SEC (Standards for Efficient Cryptography) point serialization.
//!
//! Uncompressed form is `0x04 || X || Y`; compressed form is `0x02 || X`
//! for an even y-coordinate and `0x03 || X` for an odd one. Coordinates are
//! fixed-width big-endian, 32 bytes for secp256k1.

use num_bigint::BigInt;

use crate::bytes::{big_from_bytes, big_to_fixed};
use crate::curve::Curve;
use crate::element::FieldElement;
use crate::errors::CurveError;
use crate::group::Operand;
use crate::point::Point;

const UNCOMPRESSED: u8 = 0x04;
const EVEN: u8 = 0x02;
const ODD: u8 = 0x03;

fn element_len(curve: &Curve) -> usize {
    (curve.p.bits() as usize + 7) / 8
}

/// Serializes a point in SEC format. The point at infinity has no encoding.
pub fn encode(
    curve: &Curve,
    point: &Point<FieldElement>,
    compressed: bool,
) -> Result<Vec<u8>, CurveError> {
    let (x, y) = match (point.x(), point.y()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(CurveError::InfinityNotEncodable),
    };

    let len = element_len(curve);
    let mut out = Vec::with_capacity(1 + 2 * len);
    if compressed {
        out.push(if y.is_even() { EVEN } else { ODD });
        out.extend_from_slice(&big_to_fixed(x.num(), len));
    } else {
        out.push(UNCOMPRESSED);
        out.extend_from_slice(&big_to_fixed(x.num(), len));
        out.extend_from_slice(&big_to_fixed(y.num(), len));
    }
    Ok(out)
}

/// Parses an SEC encoded point, recovering the y-coordinate via the field
/// square root for the compressed form.
pub fn decode(curve: &Curve, buf: &[u8]) -> Result<Point<FieldElement>, CurveError> {
    let len = element_len(curve);
    match buf.first().copied() {
        Some(UNCOMPRESSED) => {
            if buf.len() != 1 + 2 * len {
                return Err(CurveError::BadLength);
            }
            let x = big_from_bytes(&buf[1..1 + len]);
            let y = big_from_bytes(&buf[1 + len..]);
            curve.point(x, y)
        }
        Some(prefix @ (EVEN | ODD)) => {
            if buf.len() != 1 + len {
                return Err(CurveError::BadLength);
            }
            let x = FieldElement::new(big_from_bytes(&buf[1..]), curve.p.clone())?;
            let a = FieldElement::new(curve.a.clone(), curve.p.clone())?;
            let b = FieldElement::new(curve.b.clone(), curve.p.clone())?;

            // y^2 = x^3 + ax + b; the root comes back with arbitrary
            // parity, pick the one the prefix asks for
            let rhs = x.pow(&BigInt::from(3)).add(&a.mul(&x)).add(&b);
            let beta = rhs.sqrt()?;
            let y = if beta.is_even() == (prefix == EVEN) {
                beta
            } else {
                beta.neg()
            };

            // membership is validated by point construction, which also
            // rejects an x with no square root
            curve.point(x.num().clone(), y.num().clone())
        }
        Some(_) => Err(CurveError::BadPrefix),
        None => Err(CurveError::BadLength),
    }
}
