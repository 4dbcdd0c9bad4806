//! HMAC-SHA algorithm family (HS256, HS384, HS512).

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported signing algorithms.
///
/// Only the symmetric HMAC family is supported. `"none"` and the
/// asymmetric names resolve to no algorithm so unsecured tokens can
/// never verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC with SHA-256
    Hs256,
    /// HMAC with SHA-384
    Hs384,
    /// HMAC with SHA-512
    Hs512,
}

impl HmacAlgorithm {
    /// Resolve a header `alg` value. Matching is exact; anything
    /// outside the HMAC family yields `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HS256" => Some(Self::Hs256),
            "HS384" => Some(Self::Hs384),
            "HS512" => Some(Self::Hs512),
            _ => None,
        }
    }

    /// Header `alg` value for this algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }

    /// Compute the MAC over `message` with `secret`.
    pub fn sign(&self, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            Self::Hs256 => sign_hs256(message, secret),
            Self::Hs384 => sign_hs384(message, secret),
            Self::Hs512 => sign_hs512(message, secret),
        }
    }
}

impl std::fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign with HMAC-SHA256 (HS256)
#[inline]
fn sign_hs256(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA384 (HS384)
#[inline]
fn sign_hs384(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA512 (HS512)
#[inline]
fn sign_hs512(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time comparison. The scan always covers every byte, so
/// duration does not depend on the position of the first difference.
/// Length mismatch is unequal.
#[inline]
#[must_use]
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
