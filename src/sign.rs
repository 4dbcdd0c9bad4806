//! Token signing, the verifier's inverse.
//!
//! Used to mint example tokens and to exercise the round-trip
//! property: anything signed here with secret S verifies with S and
//! fails with any other secret.

use crate::algorithms::HmacAlgorithm;
use crate::encoding::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use crate::types::Header;
use chrono::{Duration, Utc};
use serde_json::{Number, Value, json};

/// Sign a claims object into a compact token, stamping `iat` to `now`
/// and, when a lifetime is given, `exp` to `now + lifetime`.
///
/// # Errors
///
/// Returns [`JwtError::InvalidClaims`] when `claims` is not a JSON
/// object, [`JwtError::Serialization`] when encoding fails.
pub fn sign_claims_at(
    claims: &Value,
    secret: &[u8],
    algorithm: HmacAlgorithm,
    lifetime: Option<Duration>,
    now: i64,
) -> JwtResult<String> {
    let Some(object) = claims.as_object() else {
        return Err(JwtError::invalid_claims("claims must be a JSON object"));
    };

    let mut object = object.clone();
    object.insert("iat".to_string(), Value::Number(Number::from(now)));
    if let Some(lifetime) = lifetime {
        object.insert(
            "exp".to_string(),
            Value::Number(Number::from(now + lifetime.num_seconds())),
        );
    }

    let header = Header::new(algorithm.name());
    let header_json =
        serde_json::to_string(&header).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let payload_json = serde_json::to_string(&Value::Object(object))
        .map_err(|e| JwtError::serialization(&e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        base64_url_encode(header_json.as_bytes()),
        base64_url_encode(payload_json.as_bytes())
    );
    let mac = algorithm.sign(signing_input.as_bytes(), secret)?;

    tracing::debug!(alg = algorithm.name(), "signed token");
    Ok(format!("{signing_input}.{}", base64_url_encode(&mac)))
}

/// Sign a claims object using the current wall clock.
///
/// # Errors
///
/// Same as [`sign_claims_at`].
pub fn sign_claims(
    claims: &Value,
    secret: &[u8],
    algorithm: HmacAlgorithm,
    lifetime: Option<Duration>,
) -> JwtResult<String> {
    sign_claims_at(claims, secret, algorithm, lifetime, Utc::now().timestamp())
}

/// Secret used by [`example_token`].
pub const EXAMPLE_SECRET: &str = "your-256-bit-secret";

/// Mint the demo token: HS256, one-hour expiry, a fixed subject and a
/// couple of recognizable custom claims.
///
/// # Errors
///
/// Same as [`sign_claims_at`].
pub fn example_token() -> JwtResult<String> {
    sign_claims(
        &json!({
            "sub": "1234567890",
            "name": "John Doe",
            "admin": true,
        }),
        EXAMPLE_SECRET.as_bytes(),
        HmacAlgorithm::Hs256,
        Some(Duration::hours(1)),
    )
}
