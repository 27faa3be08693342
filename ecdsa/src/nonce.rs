//! Deterministic nonce derivation per RFC 6979 with HMAC-SHA256.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::One;
use sha2::Sha256;

use curve::{big_from_bytes, big_to_bytes};

type HmacSha256 = Hmac<Sha256>;

fn hmac(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}

/// Derives a deterministic nonce `k` in `[1, n-1]` from the secret and the
/// message digest `z`, per the HMAC-DRBG construction of RFC 6979.
///
/// A digest exceeding `n` is brought down by a single subtraction rather
/// than a full reduction; that is sufficient here because the digest width
/// matches the byte length of the secp256k1 order.
pub fn generate_k(secret: &BigUint, z: &BigUint, n: &BigUint) -> BigUint {
    let mut k = vec![0x00u8; 32];
    let mut v = vec![0x01u8; 32];

    let z = if z > n { z - n } else { z.clone() };
    let zbytes = big_to_bytes(&z);
    let sbytes = big_to_bytes(secret);

    k = hmac(&k, &[&v, &[0x00], &sbytes, &zbytes]);
    v = hmac(&k, &[&v]);
    k = hmac(&k, &[&v, &[0x01], &sbytes, &zbytes]);
    v = hmac(&k, &[&v]);

    loop {
        v = hmac(&k, &[&v]);
        let candidate = big_from_bytes(&v);
        if candidate >= BigUint::one() && &candidate < n {
            return candidate;
        }
        k = hmac(&k, &[&v, &[0x00]]);
        v = hmac(&k, &[&v]);
    }
}
