//! Tolerant extraction of well-known claims.
//!
//! Payload content is untrusted, so a claim with the wrong JSON type
//! is treated as absent rather than failing the whole decode.

use serde_json::Value;

/// Extract a numeric Unix-seconds claim by name.
#[inline]
#[must_use]
pub fn timestamp_claim(claims: &Value, name: &str) -> Option<i64> {
    claims.get(name).and_then(Value::as_i64)
}

/// Extract the expiration time (exp).
#[inline]
#[must_use]
pub fn expiration(claims: &Value) -> Option<i64> {
    timestamp_claim(claims, "exp")
}

/// Extract the not-before time (nbf).
#[inline]
#[must_use]
pub fn not_before(claims: &Value) -> Option<i64> {
    timestamp_claim(claims, "nbf")
}

/// Extract the issued-at time (iat).
#[inline]
#[must_use]
pub fn issued_at(claims: &Value) -> Option<i64> {
    timestamp_claim(claims, "iat")
}

/// Extract the subject claim (sub).
#[inline]
#[must_use]
pub fn subject(claims: &Value) -> Option<&str> {
    claims.get("sub").and_then(|v| v.as_str())
}

/// Extract the issuer claim (iss).
#[inline]
#[must_use]
pub fn issuer(claims: &Value) -> Option<&str> {
    claims.get("iss").and_then(|v| v.as_str())
}

/// Extract the JWT ID claim (jti).
#[inline]
#[must_use]
pub fn jwt_id(claims: &Value) -> Option<&str> {
    claims.get("jti").and_then(|v| v.as_str())
}

/// Extract the audience claim (aud), accepting both the single-string
/// and string-array forms.
#[must_use]
pub fn audience(claims: &Value) -> Option<Vec<String>> {
    match claims.get("aud")? {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

/// Whether the token is expired at `now` (Unix seconds).
///
/// The boundary is inclusive: a token with `exp == now` is expired.
#[inline]
#[must_use]
pub fn is_expired(claims: &Value, now: i64) -> bool {
    expiration(claims).is_some_and(|exp| now >= exp)
}

/// Whether the token is not yet valid at `now` (Unix seconds).
#[inline]
#[must_use]
pub fn is_not_yet_valid(claims: &Value, now: i64) -> bool {
    not_before(claims).is_some_and(|nbf| now < nbf)
}

/// Time-based validity of a claims object, evaluated at a fixed
/// instant. Independent of signature verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStatus {
    /// exp is present and `evaluated_at >= exp`.
    pub expired: bool,
    /// nbf is present and `evaluated_at < nbf`.
    pub not_yet_valid: bool,
    /// exp claim, when present and numeric.
    pub expires_at: Option<i64>,
    /// nbf claim, when present and numeric.
    pub not_before: Option<i64>,
    /// iat claim, when present and numeric.
    pub issued_at: Option<i64>,
    /// The instant the evaluation used (Unix seconds).
    pub evaluated_at: i64,
}

impl TimeStatus {
    /// Evaluate expiry and not-before against `now` (Unix seconds).
    #[must_use]
    pub fn evaluate(claims: &Value, now: i64) -> Self {
        Self {
            expired: is_expired(claims, now),
            not_yet_valid: is_not_yet_valid(claims, now),
            expires_at: expiration(claims),
            not_before: not_before(claims),
            issued_at: issued_at(claims),
            evaluated_at: now,
        }
    }
}
