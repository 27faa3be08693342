//! Big-endian byte conversions for big integers, shared by the signature
//! crates and the SEC codec.

use num_bigint::BigUint;

/// Minimal big-endian encoding; zero encodes as a single `0x00` byte.
pub fn big_to_bytes(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Fixed-width big-endian encoding, left-padded with zeros.
///
/// Panics when the value does not fit, which is a programming error for
/// the reduced residues this is used with.
pub fn big_to_fixed(n: &BigUint, len: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    assert!(bytes.len() <= len, "value does not fit in {len} bytes");
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

/// Big-endian decoding.
pub fn big_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Byte-wise xor of two equal-length slices.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert_eq!(a.len(), b.len(), "xor requires equal length inputs");
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}
