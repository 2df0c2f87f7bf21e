//! Identity claims carried inside the bearer token payload.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use serde::Deserialize;

use crate::error::TokenError;

/// Role assigned when the token payload carries none.
pub const DEFAULT_ROLE: &str = "cliente";

/// Raw payload shape as it appears in the token JSON. All fields are
/// optional at this stage; [`Claims::from_raw`] decides what is fatal.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Validated identity claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    pub role: String,
    /// Expiry as seconds since the Unix epoch, when the issuer set one.
    pub exp: Option<u64>,
}

impl Claims {
    /// Promote a raw payload to validated claims.
    ///
    /// The identity comes from `sub`, falling back to `email`; a payload
    /// carrying neither is a decode failure, not a partial success. A
    /// missing role defaults to [`DEFAULT_ROLE`].
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidToken`] when no subject claim exists.
    pub(crate) fn from_raw(raw: RawClaims) -> Result<Self, TokenError> {
        let email = match raw.sub.or(raw.email) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(TokenError::invalid("missing subject claim")),
        };
        let role = raw.role.unwrap_or_else(|| DEFAULT_ROLE.to_owned());
        Ok(Claims { email, role, exp: raw.exp })
    }

    /// Whether the claims carry an `exp` that has passed.
    ///
    /// A token without `exp` is trusted until the cookie is removed or
    /// the user logs out.
    #[must_use]
    pub fn is_expired(&self, now: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }
}
