//! # sweets-store: Mock Backend for the Sweet Shop
//!
//! This crate plays the part of a backend service. Everything lives in
//! memory; every facade call waits a short artificial delay so the front end
//! behaves as if it were talking over a network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sweet Shop Data Flow                             │
//! │                                                                         │
//! │  Page action (purchase "1")                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   sweets-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   MockApi     │    │  Repository   │    │   Session    │  │   │
//! │  │   │   (api.rs)    │    │ (memory.rs)   │    │ (session.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ latency       │───►│ RwLock<Vec<   │    │ "user" key → │  │   │
//! │  │   │ validation    │    │   Sweet>>     │    │  JSON file   │  │   │
//! │  │   │ auth (demo)   │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`api`] - The `MockApi` facade the pages call
//! - [`repository`] - `SweetRepository` trait and the in-memory implementation
//! - [`seed`] - The demo catalog
//! - [`latency`] - Simulated per-operation delays
//! - [`auth`] - Demo authenticator (not real authentication)
//! - [`session`] - Key-value session storage (file and memory)
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sweets_store::{Latency, MockApi};
//!
//! let api = MockApi::demo(Latency::None);
//! let sweets = api.get_sweets().await?;
//! let sweet = api.purchase_sweet("1").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod auth;
pub mod error;
pub mod latency;
pub mod repository;
pub mod seed;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::MockApi;
pub use auth::{Authenticator, DemoAuthenticator};
pub use error::{StoreError, StoreResult};
pub use latency::{Latency, Operation};
pub use repository::memory::InMemorySweetRepository;
pub use repository::SweetRepository;
pub use session::{FileSessionStorage, MemorySessionStorage, SessionStorage, SESSION_USER_KEY};
