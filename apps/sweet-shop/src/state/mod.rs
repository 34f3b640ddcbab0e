//! # State Module
//!
//! Shared state the pages are handed at construction.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────┐                │
//! │  │   MockApi    │  │ SessionContext │  │   Toaster    │                │
//! │  │ (store crate)│  │                │  │              │                │
//! │  │  Arc<dyn     │  │  Arc<dyn       │  │  Arc<Mutex<  │                │
//! │  │   Repo>      │  │   Storage>     │  │   Vec<Toast> │                │
//! │  └──────────────┘  └────────────────┘  └──────────────┘                │
//! │                                                                         │
//! │  All three are cheap clones sharing the same underlying data, so the  │
//! │  dashboard and admin pages see each other's writes.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod session;
mod toast;

pub use session::SessionContext;
pub use toast::{Toast, ToastVariant, Toaster};
