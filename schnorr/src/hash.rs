//! BIP340 tagged hashing and x-only point lifting.

use num_bigint::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

use curve::{big_from_bytes, big_to_fixed, FieldElement, Point, SECP256K1};

use crate::errors::SchnorrError;

/// Domain-separated hash: `SHA256(SHA256(tag) || SHA256(tag) || parts...)`.
pub fn tagged_hash(tag: &str, parts: &[&[u8]]) -> [u8; 32] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The per-signature challenge
/// `e = int(H_challenge(r || P.x || m)) mod n`.
pub(crate) fn challenge(r: &BigUint, px: &BigUint, msg: &[u8]) -> BigUint {
    let digest = tagged_hash(
        "BIP0340/challenge",
        &[&big_to_fixed(r, 32), &big_to_fixed(px, 32), msg],
    );
    big_from_bytes(&digest) % &SECP256K1.n
}

/// Lifts an x-only coordinate to the curve point with an even
/// y-coordinate.
///
/// Solves `y^2 = x^3 + 7` via the `p % 4 == 3` square root and fails when
/// `x` is out of range or the candidate root does not square back (i.e.
/// `x` is not on the curve).
pub fn lift_x(x: &BigUint) -> Result<Point<FieldElement>, SchnorrError> {
    let curve = &*SECP256K1;
    let p = &curve.p;
    if x >= p {
        return Err(SchnorrError::LiftXFailed);
    }

    let c = (x.modpow(&BigUint::from(3u8), p) + &curve.b) % p;
    let exp = (p + BigUint::from(1u8)) / BigUint::from(4u8);
    let y = c.modpow(&exp, p);
    if y.modpow(&BigUint::from(2u8), p) != c {
        return Err(SchnorrError::LiftXFailed);
    }

    let y = if (&y % BigUint::from(2u8)).is_zero() {
        y
    } else {
        p - y
    };
    curve
        .point(x.clone(), y)
        .map_err(|_| SchnorrError::LiftXFailed)
}
