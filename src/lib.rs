//! Decode, inspect, and verify HMAC-signed JSON Web Tokens.
//!
//! This crate covers the compact JWS serialization (RFC 7515/7519)
//! with the symmetric HMAC family only:
//! - structural parsing and atomic decoding of header and claims
//! - tolerant well-known claim extraction and expiry evaluation
//! - constant-time HS256/HS384/HS512 signature verification
//! - a signing counterpart for minting tokens
//! - a sequenced async orchestrator with last-input-wins semantics
//!
//! Decoding never requires a secret; signature state and expiry are
//! reported as independent facts.
//!
//! ```no_run
//! use jwt_inspect::{inspect, Verification};
//!
//! # fn main() -> Result<(), jwt_inspect::JwtError> {
//! let token = jwt_inspect::sign::example_token()?;
//! let report = inspect(&token, Some(jwt_inspect::sign::EXAMPLE_SECRET))?;
//! assert_eq!(report.verification, Verification::Valid);
//! assert!(!report.time.expired);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod claims;
pub mod encoding;
mod error;
pub mod inspect;
pub mod sign;
mod token;
mod types;
pub mod verify;

pub use algorithms::HmacAlgorithm;
pub use claims::TimeStatus;
pub use error::{JwtError, JwtResult};
pub use inspect::{Completion, Inspection, InspectionFuture, Inspector, inspect, inspect_at};
pub use sign::{sign_claims, sign_claims_at};
pub use token::{DecodedToken, TokenParts};
pub use types::{Header, InvalidReason, Verification};
pub use verify::verify_signature;
