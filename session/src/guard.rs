//! Navigation guard decision procedure.
//!
//! DESIGN
//! ======
//! The guard is a pure function from (route policy, session) to a
//! terminal [`Decision`]; the SPA's router integration executes the
//! outcome (in-app navigate, full-page redirect to the auth provider, or
//! nothing). Keeping the side effects with the caller is what makes the
//! whole procedure unit-testable. The guard holds no state between
//! navigation attempts beyond what it reads from the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::policy::RouteAuthPolicy;
use crate::store::{self, Session, TokenStore};

/// Route every internal denial lands on.
pub const LANDING_ROUTE: &str = "/";

/// Terminal outcome of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Destination may render.
    Allow,
    /// Abort and navigate in-app to the given path (role denial).
    RedirectInternal(String),
    /// Abort and leave the page for the given URL (not authenticated).
    RedirectExternal(String),
}

/// Decide whether the current session may enter a route.
///
/// Order matters: a public route is allowed before the session is even
/// consulted, an unauthenticated session is sent to the external login
/// before roles are considered, and the role filter only applies when
/// the route declares one.
#[must_use]
pub fn decide(policy: &RouteAuthPolicy, session: &Session, login_url: &str) -> Decision {
    if !policy.requires_auth {
        return Decision::Allow;
    }

    if !session.is_authenticated() {
        return Decision::RedirectExternal(login_url.to_owned());
    }

    if !policy.allows_role(session.role()) {
        return Decision::RedirectInternal(LANDING_ROUTE.to_owned());
    }

    Decision::Allow
}

/// Full per-navigation procedure: lazily restore the session from the
/// persisted token when it is not yet authenticated (fresh page load
/// with a live cookie), then decide.
///
/// `session` is updated in place to whichever complete state restoration
/// produced, so the caller can publish it back to its shared state.
pub fn authorize(
    policy: &RouteAuthPolicy,
    session: &mut Session,
    store: &impl TokenStore,
    now: u64,
    login_url: &str,
) -> Decision {
    if !session.is_authenticated() {
        *session = store::restore(store, now);
    }
    decide(policy, session, login_url)
}
