//! BIP340 signature pair and its 64-byte wire format.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use curve::{big_from_bytes, big_to_fixed};

use crate::errors::SchnorrError;

/// A BIP340 signature `(r, s)`: the x-coordinate of the nonce point and a
/// scalar response.
///
/// The wire format is the 64-byte concatenation of both values as 32-byte
/// big-endian integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Parses the 64-byte wire form, rejecting any other length.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, SchnorrError> {
        if buf.len() != 64 {
            return Err(SchnorrError::InvalidSignature);
        }
        Ok(Signature {
            r: big_from_bytes(&buf[..32]),
            s: big_from_bytes(&buf[32..]),
        })
    }

    /// `R.x || s`, both 32-byte big-endian.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&big_to_fixed(&self.r, 32));
        out[32..].copy_from_slice(&big_to_fixed(&self.s, 32));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_format() {
        let sig = Signature::new(BigUint::from(0x1234u16), BigUint::from(0xabcdefu32));
        let bytes = sig.to_bytes();
        assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);
        // values sit right-aligned in their 32-byte halves
        assert_eq!(&bytes[30..32], &[0x12, 0x34]);
        assert_eq!(&bytes[61..64], &[0xab, 0xcd, 0xef]);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Signature::from_bytes(&[0u8; 63]).unwrap_err(),
            SchnorrError::InvalidSignature
        );
        assert_eq!(
            Signature::from_bytes(&[0u8; 65]).unwrap_err(),
            SchnorrError::InvalidSignature
        );
    }
}
