//! Error types for ECDSA signing and DER parsing.

use thiserror::Error;

/// Errors that can occur while signing or while decoding a DER signature.
///
/// A signature that is well formed but does not satisfy the verification
/// equation is not an error; `verify` reports that as `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// The secret scalar was zero or not below the group order.
    #[error("invalid secret")]
    InvalidSecret,

    /// A DER signature did not start with the 0x30 sequence byte.
    #[error("bad signature prefix")]
    BadPrefix,

    /// The declared DER length did not match the buffer.
    #[error("bad signature length")]
    BadLength,

    /// An integer field was not introduced by the 0x02 marker.
    #[error("bad signature marker")]
    BadMarker,
}
