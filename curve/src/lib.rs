//! Elliptic curve arithmetic over prime fields, with secp256k1 built in.
//!
//! This crate provides modular arithmetic, a generic short-Weierstrass
//! group law parameterized over the [`Operand`] coordinate trait, the
//! secp256k1 parameter set as a shared constant, and the SEC point codec.
//! The signature schemes live in the sibling `ecdsa` and `schnorr` crates.

mod bytes;
mod curve;
mod element;
mod errors;
mod field;
mod group;
mod point;
mod sec;

pub use bytes::{big_from_bytes, big_to_bytes, big_to_fixed, xor};
pub use curve::{Curve, SECP256K1};
pub use element::FieldElement;
pub use errors::CurveError;
pub use field::FiniteField;
pub use group::Operand;
pub use point::{Coords, Point};
pub use sec::{decode as sec_decode, encode as sec_encode};
