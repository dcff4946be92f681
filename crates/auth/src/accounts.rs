//! Preconfigured demo accounts and the credential-resolution policy.
//!
//! Resolution is deterministic and storage-free:
//! - No IO
//! - No panics
//! - The store layer persists the returned identity/token

use chrono::Utc;
use serde::{Deserialize, Serialize};

use sugarrush_core::UserId;

use crate::{Identity, Role};

/// A preconfigured account with a known password.
///
/// In a real system credentials would never live next to the identity; this
/// is the documented mock policy of the demo backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAccount {
    pub id: UserId,
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
}

impl MockAccount {
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.to_string(),
            role: self.role,
        }
    }
}

/// The preconfigured admin account.
pub fn admin_account() -> MockAccount {
    MockAccount {
        id: UserId::new("admin-123"),
        username: "admin",
        password: "password",
        role: Role::Admin,
    }
}

/// The preconfigured customer account.
pub fn customer_account() -> MockAccount {
    MockAccount {
        id: UserId::new("cust-456"),
        username: "customer",
        password: "password",
        role: Role::Customer,
    }
}

/// Outcome of a successful authentication: the identity plus an opaque mock
/// session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub identity: Identity,
    pub token: String,
}

/// Resolve a credential pair to an identity.
///
/// Exact matches against the two preconfigured accounts win. Anything else
/// falls back to *auto-provisioning*: a fresh customer identity is fabricated
/// from the supplied username, so resolution never fails for bad
/// credentials. A production design would reject unrecognized credentials
/// instead; the fallback is the demo's documented registration-on-the-fly
/// behavior.
pub fn resolve_credentials(username: &str, password: &str) -> AuthResponse {
    for account in [admin_account(), customer_account()] {
        if account.matches(username, password) {
            return AuthResponse {
                identity: account.identity(),
                token: format!("mock-jwt-{}-token", account.role),
            };
        }
    }

    AuthResponse {
        identity: Identity {
            id: UserId::generate(),
            username: username.to_string(),
            role: Role::Customer,
        },
        token: format!("mock-jwt-{}", Utc::now().timestamp_millis()),
    }
}
