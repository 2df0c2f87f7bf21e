//! Token decode error taxonomy.
//!
//! Every variant is recoverable: callers degrade to an empty session
//! rather than surfacing an error to the user.

use thiserror::Error;

/// Failure to turn a stored bearer token into usable claims.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token present but structurally or semantically undecodable.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    /// Token decoded but its `exp` claim is in the past.
    #[error("token expired")]
    Expired,
}

impl TokenError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        TokenError::InvalidToken { reason: reason.into() }
    }
}
