//! Verification orchestration.
//!
//! [`inspect_at`] is the plain callable: parse, decode, optionally
//! verify, and evaluate time-based validity in one pass. [`Inspector`]
//! layers the deferred-completion model on top: each request carries a
//! sequence tag, runs on a spawned task, and resolves through a
//! oneshot-backed future. A completion whose tag has been superseded
//! by a newer request resolves to [`Completion::Superseded`] so stale
//! results can never shadow the newest input (last-input-wins).

use crate::claims::TimeStatus;
use crate::error::JwtResult;
use crate::token::{DecodedToken, TokenParts};
use crate::types::Verification;
use crate::verify::verify_signature;
use chrono::Utc;
use std::{
    future::Future,
    pin::Pin,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    task::{Context, Poll},
};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Everything known about one token at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Parsed header and claims.
    pub decoded: DecodedToken,
    /// Signature outcome. [`Verification::Unverified`] when no secret
    /// was supplied.
    pub verification: Verification,
    /// Expiry and not-before state, evaluated regardless of the
    /// signature outcome.
    pub time: TimeStatus,
}

/// Decode a token and, when a secret is supplied, verify its
/// signature, evaluating time-based claims at `now` (Unix seconds).
///
/// Decoding never requires a secret; without one the result carries
/// [`Verification::Unverified`] alongside the decoded content.
///
/// # Errors
///
/// Structural and JSON failures abort the whole decode; see
/// [`crate::JwtError`]. A failed signature check is not an error.
pub fn inspect_at(token: &str, secret: Option<&str>, now: i64) -> JwtResult<Inspection> {
    let parts = TokenParts::parse(token)?;
    let decoded = DecodedToken::decode(&parts)?;

    let verification = match secret {
        None => Verification::Unverified,
        Some(secret) => verify_signature(&parts, decoded.algorithm(), secret.as_bytes())?,
    };

    let time = TimeStatus::evaluate(&decoded.claims, now);
    Ok(Inspection {
        decoded,
        verification,
        time,
    })
}

/// [`inspect_at`] with the current wall clock.
///
/// # Errors
///
/// Same as [`inspect_at`].
pub fn inspect(token: &str, secret: Option<&str>) -> JwtResult<Inspection> {
    inspect_at(token, secret, Utc::now().timestamp())
}

/// How a submitted inspection finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// This request was still the newest when it finished.
    Fresh(JwtResult<Inspection>),
    /// A newer request was submitted before this one finished; the
    /// result is withheld.
    Superseded,
}

/// Sequenced asynchronous inspection driver.
///
/// Independent submissions share nothing but the sequence counter, so
/// they may run in parallel without locking.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    latest: Arc<AtomicU64>,
}

impl Inspector {
    /// Create a new inspector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a token for inspection. Requires a tokio runtime.
    ///
    /// The returned future resolves to [`Completion::Superseded`] when
    /// a newer submission happened first.
    pub fn submit(&self, token: impl Into<String>, secret: Option<&str>) -> InspectionFuture {
        let token = token.into();
        let secret = secret.map(|s| Zeroizing::new(s.to_string()));
        let tag = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = inspect_at(
                &token,
                secret.as_ref().map(|s| s.as_str()),
                Utc::now().timestamp(),
            );

            let completion = if latest.load(Ordering::SeqCst) == tag {
                Completion::Fresh(result)
            } else {
                tracing::debug!(tag, "discarding superseded inspection");
                Completion::Superseded
            };
            let _ = tx.send(completion);
        });

        InspectionFuture { rx }
    }
}

/// Future for a submitted inspection.
pub struct InspectionFuture {
    rx: oneshot::Receiver<Completion>,
}

impl Future for InspectionFuture {
    type Output = Completion;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(completion)) => Poll::Ready(completion),
            Poll::Ready(Err(_)) => Poll::Ready(Completion::Fresh(Err(
                crate::error::JwtError::internal("inspection task dropped"),
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}
