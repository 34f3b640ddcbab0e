//! # Session Context
//!
//! Reads and writes the signed-in [`User`] through a [`SessionStorage`].
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login ──► sign_in(user)    "user" = JSON, "signedInAt" = RFC 3339    │
//! │                                                                         │
//! │  page mount ──► current_user()                                         │
//! │                   ├── Some(user) ─► render                             │
//! │                   └── None ───────► redirect to Login                  │
//! │                                                                         │
//! │  logout ──► sign_out()      both keys removed                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sweets_core::User;
use sweets_store::{SessionStorage, StoreResult, SESSION_USER_KEY};
use tracing::{info, warn};

const SIGNED_IN_AT_KEY: &str = "signedInAt";

/// Handle on the persisted session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    storage: Arc<dyn SessionStorage>,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        SessionContext { storage }
    }

    /// The signed-in user, if any.
    ///
    /// Unreadable or corrupt session data counts as signed out.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get_item(SESSION_USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read session: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring corrupt session record: {}", e);
                None
            }
        }
    }

    /// When the current session started, if recorded.
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get_item(SIGNED_IN_AT_KEY).ok()??;
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }

    pub fn sign_in(&self, user: &User) -> StoreResult<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_USER_KEY, &json)?;
        self.storage
            .set_item(SIGNED_IN_AT_KEY, &Utc::now().to_rfc3339())?;

        info!(user_id = %user.id, is_admin = user.is_admin, "Session started");
        Ok(())
    }

    pub fn sign_out(&self) -> StoreResult<()> {
        self.storage.remove_item(SESSION_USER_KEY)?;
        self.storage.remove_item(SIGNED_IN_AT_KEY)?;

        info!("Session ended");
        Ok(())
    }
}
