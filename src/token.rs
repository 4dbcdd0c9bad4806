//! Token structural parsing.
//!
//! A compact token is exactly three dot-separated base64url segments.
//! [`TokenParts`] keeps the raw segment text: the verifier needs the
//! original header and payload bytes verbatim, since re-encoding the
//! parsed JSON would not byte-match the signing input. [`DecodedToken`]
//! is the parsed view, produced atomically per input.

use crate::encoding::base64_url_decode;
use crate::error::{JwtError, JwtResult};
use serde_json::Value;

/// Raw segments of a compact token, split but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    header: String,
    payload: String,
    signature: String,
}

impl TokenParts {
    /// Split a token string into its three segments.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::MalformedToken`] when the segment count is
    /// not exactly three or the header/payload segment is empty.
    pub fn parse(token: &str) -> JwtResult<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(JwtError::malformed_token(&format!(
                "expected 3 dot-separated segments, found {}",
                parts.len()
            )));
        }
        if parts[0].is_empty() || parts[1].is_empty() {
            return Err(JwtError::malformed_token(
                "header and payload segments must be non-empty",
            ));
        }
        Ok(Self {
            header: parts[0].to_string(),
            payload: parts[1].to_string(),
            signature: parts[2].to_string(),
        })
    }

    /// Raw base64url header segment.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Raw base64url payload segment.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Raw base64url signature segment, never decoded eagerly.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The exact byte string the MAC is computed over:
    /// `header.payload`, undecoded.
    #[must_use]
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}

/// Parsed header and claims of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    /// Header as a JSON object.
    pub header: Value,
    /// Payload claims as a JSON object. Untrusted content; individual
    /// claims are read through the tolerant extractors in
    /// [`crate::claims`].
    pub claims: Value,
}

impl DecodedToken {
    /// Decode the header and payload segments of `parts`.
    ///
    /// Either both segments decode to JSON objects or the whole decode
    /// fails; there is no partial result.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Base64Decode`] for an undecodable segment,
    /// [`JwtError::InvalidHeaderJson`] or
    /// [`JwtError::InvalidPayloadJson`] when a segment is not a JSON
    /// object.
    pub fn decode(parts: &TokenParts) -> JwtResult<Self> {
        let header_bytes = base64_url_decode(parts.header())?;
        let header: Value = serde_json::from_slice(&header_bytes)
            .map_err(|e| JwtError::invalid_header_json(&e.to_string()))?;
        if !header.is_object() {
            return Err(JwtError::invalid_header_json(
                "header is not a JSON object",
            ));
        }

        let payload_bytes = base64_url_decode(parts.payload())?;
        let claims: Value = serde_json::from_slice(&payload_bytes)
            .map_err(|e| JwtError::invalid_payload_json(&e.to_string()))?;
        if !claims.is_object() {
            return Err(JwtError::invalid_payload_json(
                "payload is not a JSON object",
            ));
        }

        Ok(Self { header, claims })
    }

    /// The header's `alg` value, when present and a string.
    #[must_use]
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg").and_then(|v| v.as_str())
    }
}
