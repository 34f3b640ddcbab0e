//! # Authentication
//!
//! The [`Authenticator`] seam and its only implementation,
//! [`DemoAuthenticator`].
//!
//! ## Not Real Authentication
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DemoAuthenticator accepts ANY credentials:                            │
//! │                                                                         │
//! │    login("admin@example.com", _)   → User { id: "1", is_admin: true }  │
//! │    login("shopper@example.com", _) → User { id: "1", is_admin: false } │
//! │    register(_, _, name)            → User { id: "2", is_admin: false } │
//! │                                                                         │
//! │  The admin flag is "email contains 'admin'". Passwords are ignored.    │
//! │  A real deployment swaps in an Authenticator that checks credentials. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Debug;

use async_trait::async_trait;
use tracing::warn;

use crate::error::StoreResult;
use sweets_core::User;

/// Turns credentials into a signed-in [`User`].
#[async_trait]
pub trait Authenticator: Send + Sync + Debug {
    async fn login(&self, email: &str, password: &str) -> StoreResult<User>;

    async fn register(&self, email: &str, password: &str, name: &str) -> StoreResult<User>;
}

/// Accept-everything authenticator for the demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, _password: &str) -> StoreResult<User> {
        warn!(email = %email, "Demo authenticator: credentials are not checked");

        let name = email.split('@').next().unwrap_or(email).to_string();
        Ok(User {
            id: "1".to_string(),
            email: email.to_string(),
            name,
            is_admin: email.contains("admin"),
        })
    }

    async fn register(&self, email: &str, _password: &str, name: &str) -> StoreResult<User> {
        warn!(email = %email, "Demo authenticator: registration is not persisted");

        Ok(User {
            id: "2".to_string(),
            email: email.to_string(),
            name: name.to_string(),
            is_admin: false,
        })
    }
}
