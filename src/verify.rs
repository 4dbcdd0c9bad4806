//! Signature verification.
//!
//! Pure computation: no I/O, no cross-call state, no secret caching.
//! The MAC is recomputed over the verbatim `header.payload` text, then
//! base64url-encoded and compared against the signature segment in
//! constant time.

use crate::algorithms::{HmacAlgorithm, constant_time_eq};
use crate::encoding::base64_url_encode;
use crate::error::JwtResult;
use crate::token::TokenParts;
use crate::types::{InvalidReason, Verification};

/// Verify the signature of `parts` against `secret`.
///
/// `alg` is the header's algorithm name; a missing, unknown, or
/// `"none"` algorithm is rejected before any crypto runs, so an
/// unsecured token is never treated as valid.
///
/// # Errors
///
/// Only key-material errors from the MAC primitive propagate; a bad
/// signature is a [`Verification::Invalid`] result, not an error.
pub fn verify_signature(
    parts: &TokenParts,
    alg: Option<&str>,
    secret: &[u8],
) -> JwtResult<Verification> {
    let name = alg.unwrap_or("");
    let Some(algorithm) = HmacAlgorithm::from_name(name) else {
        tracing::debug!(alg = name, "rejecting unsupported algorithm");
        return Ok(Verification::Invalid(InvalidReason::UnsupportedAlgorithm(
            name.to_string(),
        )));
    };

    let signing_input = parts.signing_input();
    let mac = algorithm.sign(signing_input.as_bytes(), secret)?;
    let expected = base64_url_encode(&mac);

    if constant_time_eq(expected.as_bytes(), parts.signature().as_bytes()) {
        Ok(Verification::Valid)
    } else {
        tracing::debug!(alg = name, "signature mismatch");
        Ok(Verification::Invalid(InvalidReason::SignatureMismatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::base64_url_encode;

    fn signed_token(header: &str, payload: &str, alg: HmacAlgorithm, secret: &[u8]) -> String {
        let signing_input = format!(
            "{}.{}",
            base64_url_encode(header.as_bytes()),
            base64_url_encode(payload.as_bytes())
        );
        let mac = alg.sign(signing_input.as_bytes(), secret).unwrap();
        format!("{signing_input}.{}", base64_url_encode(&mac))
    }

    #[test]
    fn accepts_matching_signature_for_each_algorithm() {
        for (alg, name) in [
            (HmacAlgorithm::Hs256, "HS256"),
            (HmacAlgorithm::Hs384, "HS384"),
            (HmacAlgorithm::Hs512, "HS512"),
        ] {
            let header = format!(r#"{{"alg":"{name}","typ":"JWT"}}"#);
            let token = signed_token(&header, r#"{"sub":"u1"}"#, alg, b"secret");
            let parts = TokenParts::parse(&token).unwrap();
            let result = verify_signature(&parts, Some(name), b"secret").unwrap();
            assert_eq!(result, Verification::Valid, "{name}");
        }
    }

    #[test]
    fn wrong_secret_is_a_mismatch() {
        let token = signed_token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"sub":"u1"}"#,
            HmacAlgorithm::Hs256,
            b"secret",
        );
        let parts = TokenParts::parse(&token).unwrap();
        let result = verify_signature(&parts, Some("HS256"), b"secretx").unwrap();
        assert_eq!(
            result,
            Verification::Invalid(InvalidReason::SignatureMismatch)
        );
    }

    #[test]
    fn none_algorithm_never_verifies() {
        let parts = TokenParts::parse("aGk.aGk.").unwrap();
        let result = verify_signature(&parts, Some("none"), b"secret").unwrap();
        assert_eq!(
            result,
            Verification::Invalid(InvalidReason::UnsupportedAlgorithm("none".to_string()))
        );
    }

    #[test]
    fn missing_algorithm_is_unsupported() {
        let parts = TokenParts::parse("aGk.aGk.sig").unwrap();
        let result = verify_signature(&parts, None, b"secret").unwrap();
        assert!(matches!(
            result,
            Verification::Invalid(InvalidReason::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn garbage_signature_segment_is_a_mismatch_not_an_error() {
        let signing_input = format!(
            "{}.{}",
            base64_url_encode(br#"{"alg":"HS256"}"#),
            base64_url_encode(br#"{"sub":"u1"}"#)
        );
        let token = format!("{signing_input}.!!not-base64!!");
        let parts = TokenParts::parse(&token).unwrap();
        let result = verify_signature(&parts, Some("HS256"), b"secret").unwrap();
        assert_eq!(
            result,
            Verification::Invalid(InvalidReason::SignatureMismatch)
        );
    }
}
