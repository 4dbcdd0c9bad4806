//! Shared type definitions.

use serde::{Deserialize, Serialize};

/// JOSE header written by the signing side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm used for signing.
    pub alg: String,
    /// Token type (always "JWT").
    pub typ: String,
}

impl Header {
    /// Create a new header for the given algorithm name.
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            alg: alg.to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Outcome of signature verification.
///
/// Orthogonal to expiry: a token can verify while expired, and an
/// unverified token still decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// No secret was supplied; the signature was not checked
    Unverified,
    /// The recomputed MAC matches the signature segment
    Valid,
    /// The signature check failed
    Invalid(InvalidReason),
}

impl Verification {
    /// Whether the signature was checked and matched.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

/// Why a signature check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Header names an algorithm outside the HMAC family, names
    /// "none", or names nothing at all
    UnsupportedAlgorithm(String),
    /// The recomputed MAC does not match the signature segment
    SignatureMismatch,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::UnsupportedAlgorithm(alg) => {
                write!(f, "Unsupported algorithm: {alg}")
            }
            InvalidReason::SignatureMismatch => write!(f, "Invalid signature"),
        }
    }
}
