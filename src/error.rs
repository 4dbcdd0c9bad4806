//! Error types for token decoding and signing.

use std::fmt;

/// Result type for JWT operations.
pub type JwtResult<T> = Result<T, JwtError>;

/// Errors surfaced while decoding or signing tokens.
///
/// Signature outcomes are deliberately not represented here: a bad
/// signature or an unsupported algorithm is reported through
/// [`crate::Verification`] so an already-decoded header and payload
/// stay available to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    /// Token does not split into exactly three non-empty segments
    MalformedToken(String),
    /// A segment is not valid base64url
    Base64Decode(String),
    /// Header segment is not a JSON object
    InvalidHeaderJson(String),
    /// Payload segment is not a JSON object
    InvalidPayloadJson(String),
    /// Claims supplied for signing are unusable
    InvalidClaims(String),
    /// Key material was rejected by the MAC primitive
    InvalidKey(String),
    /// Serialization failed
    Serialization(String),
    /// Internal error
    Internal(String),
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::MalformedToken(msg) => write!(f, "Malformed token: {msg}"),
            JwtError::Base64Decode(msg) => write!(f, "Invalid base64url segment: {msg}"),
            JwtError::InvalidHeaderJson(msg) => write!(f, "Invalid header JSON: {msg}"),
            JwtError::InvalidPayloadJson(msg) => write!(f, "Invalid payload JSON: {msg}"),
            JwtError::InvalidClaims(msg) => write!(f, "Invalid claims: {msg}"),
            JwtError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            JwtError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            JwtError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for JwtError {}

impl JwtError {
    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed_token(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create a base64 decode error
    #[inline]
    #[must_use]
    pub fn base64_decode(msg: &str) -> Self {
        JwtError::Base64Decode(msg.to_string())
    }

    /// Create an invalid header JSON error
    #[inline]
    #[must_use]
    pub fn invalid_header_json(msg: &str) -> Self {
        JwtError::InvalidHeaderJson(msg.to_string())
    }

    /// Create an invalid payload JSON error
    #[inline]
    #[must_use]
    pub fn invalid_payload_json(msg: &str) -> Self {
        JwtError::InvalidPayloadJson(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an internal error
    #[inline]
    #[must_use]
    pub fn internal(msg: &str) -> Self {
        JwtError::Internal(msg.to_string())
    }
}
