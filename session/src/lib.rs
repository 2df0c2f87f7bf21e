//! # session
//!
//! Client-side session and route-authorization core for the hotel SPA.
//! Pure logic only: token decoding, the session entity and its
//! transitions, per-route auth policies, and the navigation guard
//! decision function. No browser types live here — the SPA crate wires
//! in cookie storage and performs the actual redirects, so everything
//! in this crate tests natively.
//!
//! TRUST MODEL
//! ===========
//! Tokens are decoded structurally, never verified. This layer is a UX
//! gate deciding which views render; the backing APIs enforce
//! authorization independently.

pub mod claims;
pub mod error;
pub mod guard;
pub mod policy;
pub mod store;
pub mod token;

pub use claims::Claims;
pub use error::TokenError;
pub use guard::Decision;
pub use policy::RouteAuthPolicy;
pub use store::{Session, TokenStore, User};
