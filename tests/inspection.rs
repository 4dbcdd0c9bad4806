//! End-to-end inspection behavior: decoding without a secret,
//! verification as an independent overlay, and expiry orthogonality.

use chrono::Duration;
use jwt_inspect::{
    HmacAlgorithm, InvalidReason, JwtError, Verification, inspect_at, sign_claims_at,
};
use serde_json::json;

const SECRET: &[u8] = b"top-secret";

fn token_with(claims: serde_json::Value, lifetime: Option<Duration>, now: i64) -> String {
    sign_claims_at(&claims, SECRET, HmacAlgorithm::Hs256, lifetime, now).unwrap()
}

#[test]
fn decodes_without_secret_as_unverified() {
    let token = token_with(json!({"sub": "u1", "role": "admin"}), None, 100);
    let report = inspect_at(&token, None, 100).unwrap();

    assert_eq!(report.verification, Verification::Unverified);
    assert_eq!(
        report.decoded.claims.get("role").and_then(|v| v.as_str()),
        Some("admin")
    );
    assert_eq!(report.decoded.algorithm(), Some("HS256"));
}

#[test]
fn correct_secret_verifies() {
    let token = token_with(json!({"sub": "u1"}), Some(Duration::hours(1)), 100);
    let report = inspect_at(&token, Some("top-secret"), 200).unwrap();

    assert_eq!(report.verification, Verification::Valid);
    assert!(!report.time.expired);
    assert_eq!(report.time.expires_at, Some(100 + 3600));
}

#[test]
fn wrong_secret_still_decodes() {
    let token = token_with(json!({"sub": "u1"}), None, 100);
    let report = inspect_at(&token, Some("top-secret-x"), 100).unwrap();

    assert_eq!(
        report.verification,
        Verification::Invalid(InvalidReason::SignatureMismatch)
    );
    // A bad signature never blocks display of the decoded payload.
    assert_eq!(
        report.decoded.claims.get("sub").and_then(|v| v.as_str()),
        Some("u1")
    );
}

#[test]
fn expiry_and_signature_are_orthogonal() {
    let token = token_with(json!({"sub": "u1"}), Some(Duration::seconds(60)), 100);

    // Expired, signature valid.
    let report = inspect_at(&token, Some("top-secret"), 1_000).unwrap();
    assert_eq!(report.verification, Verification::Valid);
    assert!(report.time.expired);

    // Expired, signature invalid. Both facts reported.
    let report = inspect_at(&token, Some("nope"), 1_000).unwrap();
    assert_eq!(
        report.verification,
        Verification::Invalid(InvalidReason::SignatureMismatch)
    );
    assert!(report.time.expired);
}

#[test]
fn not_yet_valid_is_reported() {
    let token = token_with(json!({"sub": "u1", "nbf": 5_000}), None, 100);
    let report = inspect_at(&token, None, 4_999).unwrap();
    assert!(report.time.not_yet_valid);
    assert_eq!(report.time.not_before, Some(5_000));

    let report = inspect_at(&token, None, 5_000).unwrap();
    assert!(!report.time.not_yet_valid);
}

#[test]
fn unsecured_tokens_are_rejected_not_trusted() {
    use jwt_inspect::encoding::base64_url_encode;

    let token = format!(
        "{}.{}.",
        base64_url_encode(br#"{"alg":"none"}"#),
        base64_url_encode(br#"{"sub":"intruder"}"#)
    );
    let report = inspect_at(&token, Some("any"), 0).unwrap();
    assert_eq!(
        report.verification,
        Verification::Invalid(InvalidReason::UnsupportedAlgorithm("none".to_string()))
    );
}

#[test]
fn asymmetric_algorithms_fold_into_unsupported() {
    use jwt_inspect::encoding::base64_url_encode;

    let token = format!(
        "{}.{}.sig",
        base64_url_encode(br#"{"alg":"RS256"}"#),
        base64_url_encode(br#"{"sub":"u1"}"#)
    );
    let report = inspect_at(&token, Some("any"), 0).unwrap();
    assert_eq!(
        report.verification,
        Verification::Invalid(InvalidReason::UnsupportedAlgorithm("RS256".to_string()))
    );
}

#[test]
fn structural_failures_abort_atomically() {
    assert!(matches!(
        inspect_at("a.b", None, 0),
        Err(JwtError::MalformedToken(_))
    ));
    assert!(matches!(
        inspect_at("a.b.c.d", None, 0),
        Err(JwtError::MalformedToken(_))
    ));
    assert!(matches!(
        inspect_at("", None, 0),
        Err(JwtError::MalformedToken(_))
    ));
}
