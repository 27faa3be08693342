//! BIP340 Schnorr signatures over secp256k1.
//!
//! Keys are x-only: a public key is the 32-byte x-coordinate of a point
//! whose y-coordinate is implicitly even, and both the effective secret and
//! the nonce are negated during signing whenever their point has an odd y.
//! The nonce is derived deterministically from the secret, an auxiliary
//! randomness input and the message through tagged hashes, and every
//! produced signature is re-verified before it is returned.
//!
//! # Example
//!
//! ```
//! let mut sk = [0u8; 32];
//! sk[31] = 3;
//! let msg = [0u8; 32];
//! let aux = [0u8; 32];
//!
//! let sig = schnorr::sign(&sk, &msg, &aux).expect("signing failed");
//! let pk = schnorr::x_only_pubkey(&sk).expect("valid secret");
//! assert!(schnorr::verify(&pk, &msg, &sig.to_bytes()).expect("well-formed input"));
//! ```

mod batch;
mod errors;
mod hash;
mod signature;

use num_traits::Zero;

use curve::{big_from_bytes, big_to_fixed, xor, Coords, Operand, SECP256K1};

pub use batch::batch_verify;
pub use errors::SchnorrError;
pub use hash::{lift_x, tagged_hash};
pub use signature::Signature;

use hash::challenge;

/// The 32-byte x-only public key for a secret scalar.
pub fn x_only_pubkey(sk: &[u8]) -> Result<[u8; 32], SchnorrError> {
    let d = big_from_bytes(sk);
    let point = SECP256K1
        .pub_point(&d)
        .map_err(|_| SchnorrError::InvalidSecretKey)?;
    let x = point
        .x()
        .expect("secret in [1, n-1] cannot reach infinity")
        .num()
        .clone();
    let mut out = [0u8; 32];
    out.copy_from_slice(&big_to_fixed(&x, 32));
    Ok(out)
}

/// Signs a 32-byte message with a secret key and auxiliary randomness.
///
/// Follows the BIP340 signing algorithm: the effective secret is flipped
/// to `n - d` when the public point has an odd y, the nonce is derived
/// from `d XOR H_aux(aux)` together with the public key and message, and
/// the result is `(R.x, k + e*d mod n)`. The produced signature is
/// self-verified before being returned.
pub fn sign(sk: &[u8], msg: &[u8], aux: &[u8]) -> Result<Signature, SchnorrError> {
    let curve = &*SECP256K1;
    let n = &curve.n;

    let dp = big_from_bytes(sk);
    if dp.is_zero() || &dp >= n {
        return Err(SchnorrError::InvalidSecretKey);
    }

    let p_point = curve.g().smul(&dp);
    let (px, p_even) = match p_point.coords() {
        Coords::Affine { x, y } => (x.num().clone(), y.is_even()),
        Coords::Infinity => unreachable!("secret in [1, n-1] cannot reach infinity"),
    };
    let d = if p_even { dp } else { n - &dp };

    let t = xor(&big_to_fixed(&d, 32), &tagged_hash("BIP0340/aux", &[aux]));
    let px_bytes = big_to_fixed(&px, 32);
    let rand = tagged_hash("BIP0340/nonce", &[&t, &px_bytes, msg]);

    let kp = big_from_bytes(&rand) % n;
    if kp.is_zero() {
        return Err(SchnorrError::ZeroNonce);
    }

    let r_point = curve.g().smul(&kp);
    let (rx, r_even) = match r_point.coords() {
        Coords::Affine { x, y } => (x.num().clone(), y.is_even()),
        Coords::Infinity => unreachable!("nonce in [1, n-1] cannot reach infinity"),
    };
    let k = if r_even { kp } else { n - &kp };

    let e = challenge(&rx, &px, msg);
    let s = (k + e * &d) % n;
    let sig = Signature::new(rx, s);

    match verify(&px_bytes, msg, &sig.to_bytes()) {
        Ok(true) => Ok(sig),
        _ => Err(SchnorrError::SelfVerifyFailed),
    }
}

/// Verifies a 64-byte signature over a 32-byte message against a 32-byte
/// x-only public key.
///
/// Wrong buffer lengths are reported as errors. Everything else, such as
/// an out of range `r` or `s`, a public key that does not lift to the
/// curve, or a signature that fails the group equation, is `Ok(false)`.
pub fn verify(pk: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool, SchnorrError> {
    if pk.len() != 32 {
        return Err(SchnorrError::InvalidPublicKey);
    }
    if msg.len() != 32 {
        return Err(SchnorrError::InvalidMessage);
    }
    let sig = Signature::from_bytes(sig)?;
    Ok(verify_parsed(pk, msg, &sig))
}

fn verify_parsed(pk: &[u8], msg: &[u8], sig: &Signature) -> bool {
    let curve = &*SECP256K1;

    if sig.r >= curve.p || sig.s >= curve.n {
        return false;
    }
    let p_point = match lift_x(&big_from_bytes(pk)) {
        Ok(point) => point,
        Err(_) => return false,
    };
    let px = match p_point.x() {
        Some(x) => x.num().clone(),
        None => return false,
    };

    // R = s*G - e*P
    let e = challenge(&sig.r, &px, msg);
    let r_point = curve.double_smul(&sig.s, &(&curve.n - e), &p_point);

    match r_point.coords() {
        Coords::Infinity => false,
        Coords::Affine { x, y } => y.is_even() && x.num() == &sig.r,
    }
}

#[cfg(test)]
mod tests;
