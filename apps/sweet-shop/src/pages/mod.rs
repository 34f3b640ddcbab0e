//! # Pages
//!
//! Page controllers: each holds the state its screen needs, exposes the
//! actions a user can take on it and renders itself as text.
//!
//! ## Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌─────────┐  login/register   ┌─────────────┐   admin    ┌────────┐  │
//! │   │  Login  │ ────────────────► │  Dashboard  │ ─────────► │ Admin  │  │
//! │   └─────────┘                   └─────────────┘ ◄───────── └────────┘  │
//! │        ▲                           │    ▲       dashboard      │       │
//! │        │          logout           │    │  non-admin guard     │       │
//! │        └───────────────────────────┘    └──────────────────────┘       │
//! │        ▲                                                       │       │
//! │        └──────────────── no session guard ─────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod dashboard;
pub mod form;

use std::fmt;

pub use admin::{AdminDialog, AdminPage};
pub use dashboard::{DashboardPage, ViewMode};
pub use form::{FormField, SweetForm};

/// Screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Admin,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "login"),
            Route::Dashboard => write!(f, "dashboard"),
            Route::Admin => write!(f, "admin"),
        }
    }
}

/// Result of mounting a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// The page is showing.
    Ready,
    /// The guard sent the user elsewhere.
    Redirect(Route),
}

/// Message shown when a load fails.
pub(crate) const LOAD_FAILED: &str = "Failed to load sweets";
