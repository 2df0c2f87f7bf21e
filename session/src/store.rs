//! Session entity and its transitions.
//!
//! INVARIANT
//! =========
//! A `Session` only ever exists in one of two complete states:
//! authenticated (`token` and `user` both present, derived from the same
//! successful decode) or empty (everything absent). The fields are
//! private and every mutation path returns a whole new value, so no
//! reader can observe `token` set while `user` is missing — even a
//! decode failure mid-restore degrades to the empty state.
//!
//! Persistence is the cookie, written by the external auth provider; the
//! [`TokenStore`] seam is how this crate reads and removes it without
//! knowing about the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::claims::Claims;
use crate::token;

/// Identity derived from decoded token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub role: String,
}

/// Where the persisted bearer token lives. The SPA implements this over
/// `document.cookie`; tests use an in-memory value.
pub trait TokenStore {
    /// Current persisted token, if any.
    fn read(&self) -> Option<String>;

    /// Remove the persisted token. Must honor the cookie's domain
    /// scoping so sibling apps under the shared parent domain lose the
    /// session too.
    fn remove(&self);
}

/// Locally cached authentication state for the current tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    is_authenticated: bool,
}

impl Session {
    /// The unauthenticated state the application starts in.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Authenticated state built from a successful decode of `token`.
    #[must_use]
    pub fn authenticated(token: String, claims: &Claims) -> Self {
        Session {
            token: Some(token),
            user: Some(User { email: claims.email.clone(), role: claims.role.clone() }),
            is_authenticated: true,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Role of the current user, empty when unauthenticated.
    #[must_use]
    pub fn role(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.role.as_str())
    }
}

/// Rebuild the session from the persisted token.
///
/// No stored token clears the session; a stored token that decodes
/// yields the authenticated state; a decode failure (including expiry)
/// is logged and degrades to the empty state, removing the bad cookie.
/// Idempotent: repeated calls with an unchanged stored token produce the
/// same session.
pub fn restore(store: &impl TokenStore, now: u64) -> Session {
    let Some(raw) = store.read() else {
        return clear_state(store);
    };

    match token::decode(&raw, now) {
        Ok(claims) => Session::authenticated(raw, &claims),
        Err(err) => {
            log::warn!("discarding stored token: {err}");
            clear_state(store)
        }
    }
}

/// Drop all session state and remove the persisted token.
pub fn clear_state(store: &impl TokenStore) -> Session {
    store.remove();
    Session::empty()
}
