//! Batch verification of BIP340 signatures.
//!
//! Verifying `u` signatures one by one costs `2u` scalar multiplications;
//! the batch equation `(sum a_i * s_i) * G = sum (a_i * R_i + a_i * e_i * P_i)`
//! with random scalars `a_i` folds them into a single comparison that only
//! fails when at least one signature is invalid (up to negligible
//! probability over the `a_i`).

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use curve::{big_from_bytes, Coords, SECP256K1};

use crate::errors::SchnorrError;
use crate::hash::{challenge, lift_x};

/// Verifies a batch of signatures in a single group equation.
///
/// The three slices are indexed together: `sigs[i]` is checked against
/// `msgs[i]` under `pks[i]`. Mismatched slice lengths and malformed
/// buffers are errors; a batch containing any invalid signature is
/// `Ok(false)`. The empty batch is vacuously valid.
pub fn batch_verify(
    pks: &[&[u8]],
    msgs: &[&[u8]],
    sigs: &[&[u8]],
) -> Result<bool, SchnorrError> {
    if pks.len() != msgs.len() || msgs.len() != sigs.len() {
        return Err(SchnorrError::LengthMismatch);
    }
    for pk in pks {
        if pk.len() != 32 {
            return Err(SchnorrError::InvalidPublicKey);
        }
    }
    for msg in msgs {
        if msg.len() != 32 {
            return Err(SchnorrError::InvalidMessage);
        }
    }
    for sig in sigs {
        if sig.len() != 64 {
            return Err(SchnorrError::InvalidSignature);
        }
    }
    if pks.is_empty() {
        return Ok(true);
    }

    let curve = &*SECP256K1;
    let n = &curve.n;
    let mut rng = coefficient_rng(pks, msgs, sigs);

    let mut lhs = BigUint::zero();
    let mut rhs = curve.infinity();
    for (i, ((pk, msg), sig)) in pks.iter().zip(msgs).zip(sigs).enumerate() {
        let r = big_from_bytes(&sig[..32]);
        let s = big_from_bytes(&sig[32..]);
        if r >= curve.p || s >= *n {
            return Ok(false);
        }
        let p_point = match lift_x(&big_from_bytes(pk)) {
            Ok(point) => point,
            Err(_) => return Ok(false),
        };
        let r_point = match lift_x(&r) {
            Ok(point) => point,
            Err(_) => return Ok(false),
        };
        let px = match p_point.coords() {
            Coords::Affine { x, .. } => x.num().clone(),
            Coords::Infinity => return Ok(false),
        };

        let a = if i == 0 {
            BigUint::one()
        } else {
            random_scalar(&mut rng)
        };
        let e = challenge(&r, &px, msg);

        lhs = (lhs + &a * &s) % n;
        rhs = &rhs + &(&r_point.smul(&a) + &p_point.smul(&((a * e) % n)));
    }

    Ok(curve.g().smul(&lhs) == rhs)
}

/// A deterministic RNG for the batch coefficients, seeded from a hash of
/// every input so that the coefficients cannot be predicted before the
/// signatures are fixed.
fn coefficient_rng(pks: &[&[u8]], msgs: &[&[u8]], sigs: &[&[u8]]) -> ChaCha20Rng {
    let mut hasher = Sha256::new();
    for pk in pks {
        hasher.update(pk);
    }
    for msg in msgs {
        hasher.update(msg);
    }
    for sig in sigs {
        hasher.update(sig);
    }
    ChaCha20Rng::from_seed(hasher.finalize().into())
}

/// Draws a uniformly random scalar in `[1, n-1]` by rejection sampling.
fn random_scalar(rng: &mut ChaCha20Rng) -> BigUint {
    let n = &SECP256K1.n;
    loop {
        let mut buf = [0u8; 32];
        rng.fill_bytes(&mut buf);
        let candidate = big_from_bytes(&buf);
        if !candidate.is_zero() && &candidate < n {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scalar_stays_in_range() {
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        for _ in 0..32 {
            let a = random_scalar(&mut rng);
            assert!(!a.is_zero());
            assert!(a < SECP256K1.n);
        }
    }

    #[test]
    fn empty_batch_is_valid() {
        assert_eq!(batch_verify(&[], &[], &[]), Ok(true));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let pk = [0u8; 32];
        assert_eq!(
            batch_verify(&[&pk], &[], &[]),
            Err(SchnorrError::LengthMismatch)
        );
    }
}
