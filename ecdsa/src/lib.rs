//! ECDSA over secp256k1 with RFC 6979 deterministic nonces and low-s
//! normalized signatures.
//!
//! Signing derives the nonce deterministically from the secret and the
//! message digest, so no RNG is involved. Produced signatures are
//! canonical (low-s); verification accepts both `(r, s)` and `(r, n-s)`,
//! which is the documented malleability of the scheme.

mod errors;
mod nonce;
mod signature;

use num_bigint::BigUint;
use num_traits::Zero;

use curve::{FieldElement, Point, SECP256K1};

pub use errors::EcdsaError;
pub use nonce::generate_k;
pub use signature::Signature;

/// Signs the digest `z` with the secret scalar.
///
/// `r` is the x-coordinate of `k*G` for the RFC 6979 nonce `k`, and
/// `s = (z + r*secret) / k mod n`, flipped to `n - s` when above `n/2`.
pub fn sign(secret: &BigUint, z: &BigUint) -> Result<Signature, EcdsaError> {
    let curve = &*SECP256K1;
    let n = &curve.n;
    if secret.is_zero() || secret >= n {
        return Err(EcdsaError::InvalidSecret);
    }

    let k = nonce::generate_k(secret, z, n);
    let r_point = curve.g().smul(&k);
    let r = r_point
        .x()
        .expect("k in [1, n-1] cannot reach infinity")
        .num()
        .clone();

    let kinv = k.modpow(&(n - BigUint::from(2u8)), n);
    let mut s = ((z + &r * secret) * kinv) % n;
    if s > n / BigUint::from(2u8) {
        s = n - s;
    }
    Ok(Signature::new(r, s))
}

/// Verifies a signature against a public point and digest.
///
/// Computes `u = z/s`, `v = r/s` and accepts iff the x-coordinate of
/// `u*G + v*P` equals `r`.
pub fn verify(point: &Point<FieldElement>, z: &BigUint, sig: &Signature) -> bool {
    let curve = &*SECP256K1;
    let n = &curve.n;

    let sinv = sig.s.modpow(&(n - BigUint::from(2u8)), n);
    let u = (z * &sinv) % n;
    let v = (&sig.r * &sinv) % n;
    let total = curve.double_smul(&u, &v, point);
    match total.x() {
        Some(x) => x.num() == &sig.r,
        None => false,
    }
}
