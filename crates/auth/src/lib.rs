//! `sugarrush-auth` — mock authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from storage: it decides *who* a
//! credential pair resolves to and *what* a given identity may see, while the
//! store layer persists the outcome.

pub mod accounts;
pub mod gate;
pub mod identity;

pub use accounts::{AuthResponse, MockAccount, admin_account, customer_account, resolve_credentials};
pub use gate::{RouteDecision, View, route};
pub use identity::{Identity, Role};
