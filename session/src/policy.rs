//! Per-route authorization policy.
//!
//! Attached statically to each route by the SPA's route table and read
//! by the navigation guard; never mutated at navigation time.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

/// Auth requirements a route declares for itself.
///
/// `allowed_roles` is opt-in: `None` means any authenticated role is
/// sufficient, so a route that only sets `requires_auth` admits every
/// logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteAuthPolicy {
    pub requires_auth: bool,
    pub allowed_roles: Option<Vec<String>>,
}

impl RouteAuthPolicy {
    /// Policy for a route anyone may visit.
    #[must_use]
    pub fn public() -> Self {
        Self::default()
    }

    /// Policy requiring any authenticated session.
    #[must_use]
    pub fn authenticated() -> Self {
        Self { requires_auth: true, allowed_roles: None }
    }

    /// Policy requiring an authenticated session with one of `roles`.
    #[must_use]
    pub fn roles(roles: &[&str]) -> Self {
        Self {
            requires_auth: true,
            allowed_roles: Some(roles.iter().map(|r| (*r).to_owned()).collect()),
        }
    }

    /// Whether `role` satisfies this policy's role filter.
    #[must_use]
    pub fn allows_role(&self, role: &str) -> bool {
        match &self.allowed_roles {
            Some(allowed) => allowed.iter().any(|r| r == role),
            None => true,
        }
    }
}
