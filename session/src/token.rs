//! Structural bearer-token decoding.
//!
//! TRUST GAP
//! =========
//! The payload is decoded, never cryptographically verified — no
//! signature, issuer, or audience checks. Client-side gating trusts the
//! claims at face value; the backing APIs must re-check authorization on
//! every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose;

use crate::claims::{Claims, RawClaims};
use crate::error::TokenError;

/// Decode a bearer token into validated claims.
///
/// Expects the common three-segment dot-separated form and reads only
/// the middle (payload) segment: base64url without padding first, padded
/// as a fallback, then JSON. `now` is seconds since the Unix epoch and
/// is compared against the payload's `exp` claim when one is present.
///
/// # Errors
///
/// [`TokenError::InvalidToken`] for any structural failure;
/// [`TokenError::Expired`] when `exp` has passed.
pub fn decode(token: &str, now: u64) -> Result<Claims, TokenError> {
    let payload = payload_segment(token)?;
    let bytes = decode_base64url(payload)?;
    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::invalid(format!("payload is not claims JSON: {e}")))?;

    let claims = Claims::from_raw(raw)?;
    if claims.is_expired(now) {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

fn payload_segment(token: &str) -> Result<&str, TokenError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(TokenError::invalid("empty token"));
    }

    let mut segments = trimmed.split('.');
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => Ok(payload),
        _ => Err(TokenError::invalid("expected three dot-separated segments")),
    }
}

fn decode_base64url(segment: &str) -> Result<Vec<u8>, TokenError> {
    // Issuers normally emit unpadded base64url; tolerate padded output.
    if let Ok(bytes) = general_purpose::URL_SAFE_NO_PAD.decode(segment) {
        return Ok(bytes);
    }
    match general_purpose::URL_SAFE.decode(segment) {
        Ok(bytes) => Ok(bytes),
        Err(_) => Err(TokenError::invalid("payload segment is not base64url")),
    }
}
