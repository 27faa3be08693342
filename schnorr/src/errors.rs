//! Error types for the BIP340 signature scheme.
//!
//! Shape errors (wrong buffer lengths, mismatched batch arrays) surface as
//! `Err`; a well-formed signature that simply does not verify is reported
//! as `Ok(false)` by the verification functions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// The secret key was zero or not below the group order.
    #[error("invalid secret key")]
    InvalidSecretKey,

    /// The derived nonce reduced to zero, which cannot be signed with.
    #[error("derived nonce is zero")]
    ZeroNonce,

    /// The x-coordinate has no square root on the curve, or is not a
    /// valid coordinate at all.
    #[error("liftX failed")]
    LiftXFailed,

    /// A freshly produced signature failed its mandatory self-check.
    #[error("verification failed")]
    SelfVerifyFailed,

    /// A public key buffer was not 32 bytes.
    #[error("invalid public key length")]
    InvalidPublicKey,

    /// A message buffer was not 32 bytes.
    #[error("invalid message length")]
    InvalidMessage,

    /// A signature buffer was not 64 bytes.
    #[error("invalid signature length")]
    InvalidSignature,

    /// Batch arrays had different lengths.
    #[error("batch inputs must have equal length")]
    LengthMismatch,
}
