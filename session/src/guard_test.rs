use std::cell::RefCell;

use base64::Engine as _;
use base64::engine::general_purpose;

use super::*;
use crate::claims::Claims;

const LOGIN_URL: &str = "http://localhost:5174/auth/login";
const NOW: u64 = 1_700_000_000;

struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    fn with(token: Option<&str>) -> Self {
        MemoryStore { token: RefCell::new(token.map(str::to_owned)) }
    }
}

impl TokenStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn remove(&self) {
        *self.token.borrow_mut() = None;
    }
}

fn token_for(payload_json: &str) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(b"{}");
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
    format!("{header}.{payload}.sig")
}

fn session_with_role(role: &str) -> Session {
    let claims = Claims { email: "ana@x.com".to_owned(), role: role.to_owned(), exp: None };
    Session::authenticated("tok".to_owned(), &claims)
}

// =============================================================
// decide
// =============================================================

#[test]
fn public_route_allows_unauthenticated() {
    let decision = decide(&RouteAuthPolicy::public(), &Session::empty(), LOGIN_URL);
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn public_route_allows_authenticated() {
    let decision = decide(&RouteAuthPolicy::public(), &session_with_role("cliente"), LOGIN_URL);
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn protected_route_redirects_unauthenticated_to_login() {
    let decision = decide(&RouteAuthPolicy::authenticated(), &Session::empty(), LOGIN_URL);
    assert_eq!(decision, Decision::RedirectExternal(LOGIN_URL.to_owned()));
}

#[test]
fn protected_route_without_role_filter_admits_any_role() {
    for role in ["cliente", "admin", "recepcion"] {
        let decision = decide(&RouteAuthPolicy::authenticated(), &session_with_role(role), LOGIN_URL);
        assert_eq!(decision, Decision::Allow, "role {role} should be admitted");
    }
}

#[test]
fn role_filter_denies_unlisted_role_to_landing() {
    let policy = RouteAuthPolicy::roles(&["admin"]);
    let decision = decide(&policy, &session_with_role("cliente"), LOGIN_URL);
    assert_eq!(decision, Decision::RedirectInternal(LANDING_ROUTE.to_owned()));
}

#[test]
fn role_filter_admits_listed_role() {
    let policy = RouteAuthPolicy::roles(&["admin", "cliente"]);
    let decision = decide(&policy, &session_with_role("admin"), LOGIN_URL);
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn unauthenticated_beats_role_filter() {
    // A role-filtered route still sends missing sessions to the external
    // login, not to the landing page.
    let policy = RouteAuthPolicy::roles(&["admin"]);
    let decision = decide(&policy, &Session::empty(), LOGIN_URL);
    assert_eq!(decision, Decision::RedirectExternal(LOGIN_URL.to_owned()));
}

// =============================================================
// authorize: lazy restore + decide
// =============================================================

#[test]
fn no_cookie_on_protected_route_redirects_externally() {
    let store = MemoryStore::with(None);
    let mut session = Session::empty();

    let decision = authorize(&RouteAuthPolicy::authenticated(), &mut session, &store, NOW, LOGIN_URL);

    assert_eq!(decision, Decision::RedirectExternal(LOGIN_URL.to_owned()));
    assert!(!session.is_authenticated());
}

#[test]
fn cliente_cookie_on_admin_route_redirects_to_landing_keeping_session() {
    let token = token_for(r#"{"sub":"ana@x.com","role":"cliente"}"#);
    let store = MemoryStore::with(Some(&token));
    let mut session = Session::empty();

    let decision = authorize(&RouteAuthPolicy::roles(&["admin"]), &mut session, &store, NOW, LOGIN_URL);

    assert_eq!(decision, Decision::RedirectInternal("/".to_owned()));
    // Role denial does not clear the restored session.
    assert!(session.is_authenticated());
    assert_eq!(session.role(), "cliente");
}

#[test]
fn admin_cookie_on_shared_route_allows() {
    let token = token_for(r#"{"sub":"ana@x.com","role":"admin"}"#);
    let store = MemoryStore::with(Some(&token));
    let mut session = Session::empty();

    let decision = authorize(
        &RouteAuthPolicy::roles(&["admin", "cliente"]),
        &mut session,
        &store,
        NOW,
        LOGIN_URL,
    );

    assert_eq!(decision, Decision::Allow);
}

#[test]
fn malformed_cookie_behaves_like_no_cookie() {
    let store = MemoryStore::with(Some("%%%not-a-token%%%"));
    let mut session = Session::empty();

    let decision = authorize(&RouteAuthPolicy::authenticated(), &mut session, &store, NOW, LOGIN_URL);

    assert_eq!(decision, Decision::RedirectExternal(LOGIN_URL.to_owned()));
    assert!(!session.is_authenticated());
    assert!(store.read().is_none());
}

#[test]
fn public_route_while_unauthenticated_allows_after_opportunistic_restore() {
    let store = MemoryStore::with(None);
    let mut session = Session::empty();

    let decision = authorize(&RouteAuthPolicy::public(), &mut session, &store, NOW, LOGIN_URL);

    assert_eq!(decision, Decision::Allow);
    assert_eq!(session, Session::empty());
}

#[test]
fn authenticated_session_skips_restore() {
    // Store holds a token for a different user; an already-authenticated
    // session must not be re-read from it.
    let token = token_for(r#"{"sub":"otro@x.com","role":"cliente"}"#);
    let store = MemoryStore::with(Some(&token));
    let mut session = session_with_role("admin");

    let decision = authorize(&RouteAuthPolicy::roles(&["admin"]), &mut session, &store, NOW, LOGIN_URL);

    assert_eq!(decision, Decision::Allow);
    assert_eq!(session.role(), "admin");
}
