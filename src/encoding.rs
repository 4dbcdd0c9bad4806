//! Base64url encoding helpers (RFC 7515).
//!
//! Segments are always the URL-safe alphabet without padding. Decoding
//! yields raw bytes; UTF-8 interpretation is left to the JSON parsing
//! boundary so multi-byte sequences survive intact.

use crate::error::{JwtError, JwtResult};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Base64 URL-safe encoding without padding.
#[inline]
#[must_use]
pub fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding.
///
/// Fails on out-of-alphabet characters or an invalid segment length.
#[inline]
pub fn base64_url_decode(input: &str) -> JwtResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| JwtError::base64_decode(&e.to_string()))
}
