//! ECDSA signature pair and its DER codec.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use curve::{big_from_bytes, big_to_bytes};

use crate::errors::EcdsaError;

/// An ECDSA signature `(r, s)` with both components in `[1, n-1]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// DER encoding: `0x30 len 0x02 rlen r 0x02 slen s`.
    ///
    /// Each integer is minimal big-endian with leading zero bytes
    /// stripped, re-prepending one `0x00` when the top bit of the first
    /// retained byte is set so the value stays non-negative under DER's
    /// signed-integer convention.
    pub fn der(&self) -> Vec<u8> {
        let r = encode_part(&self.r);
        let s = encode_part(&self.s);
        let mut out = vec![0x30, (r.len() + s.len()) as u8];
        out.extend_from_slice(&r);
        out.extend_from_slice(&s);
        out
    }

    /// Parses a DER signature, rejecting malformed prefixes, lengths and
    /// markers.
    pub fn parse(buf: &[u8]) -> Result<Self, EcdsaError> {
        let mut cursor = Cursor::new(buf);

        if cursor.take_byte()? != 0x30 {
            return Err(EcdsaError::BadPrefix);
        }
        let len = cursor.take_byte()? as usize;
        if len + 2 != buf.len() {
            return Err(EcdsaError::BadLength);
        }

        if cursor.take_byte()? != 0x02 {
            return Err(EcdsaError::BadMarker);
        }
        let rlen = cursor.take_byte()? as usize;
        let r = big_from_bytes(cursor.take(rlen)?);

        if cursor.take_byte()? != 0x02 {
            return Err(EcdsaError::BadMarker);
        }
        let slen = cursor.take_byte()? as usize;
        let s = big_from_bytes(cursor.take(slen)?);

        if !cursor.is_empty() {
            return Err(EcdsaError::BadLength);
        }
        Ok(Signature { r, s })
    }
}

fn encode_part(v: &BigUint) -> Vec<u8> {
    let bytes = big_to_bytes(v);
    let stripped: &[u8] = match bytes.iter().position(|&b| b != 0) {
        Some(i) => &bytes[i..],
        None => &[],
    };

    let mut out = vec![0x02, 0x00];
    if stripped.first().is_some_and(|&b| b & 0x80 != 0) {
        out.push(0x00);
    }
    out.extend_from_slice(stripped);
    out[1] = (out.len() - 2) as u8;
    out
}

struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Cursor { buf }
    }

    fn take_byte(&mut self) -> Result<u8, EcdsaError> {
        let (&byte, rest) = self.buf.split_first().ok_or(EcdsaError::BadLength)?;
        self.buf = rest;
        Ok(byte)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], EcdsaError> {
        if self.buf.len() < len {
            return Err(EcdsaError::BadLength);
        }
        let (taken, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(taken)
    }

    fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
