//! # Repository Module
//!
//! Storage seam for the sweet catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where The Catalog Lives                              │
//! │                                                                         │
//! │  MockApi                                                               │
//! │       │                                                                 │
//! │       │  repo.purchase("1")                                            │
//! │       ▼                                                                 │
//! │  Arc<dyn SweetRepository>                                              │
//! │  ├── list(&self)                                                       │
//! │  ├── get(&self, id)                                                    │
//! │  ├── insert(&self, new)                                                │
//! │  ├── update(&self, id, patch)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  ├── purchase(&self, id)                                               │
//! │  └── restock(&self, id, amount)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemorySweetRepository (RwLock<Vec<Sweet>>)                          │
//! │                                                                         │
//! │  The store is injected, never global: tests build a fresh one each,    │
//! │  pages share one through the facade.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Implementations
//!
//! - [`memory::InMemorySweetRepository`] - Vec-backed store for the demo

pub mod memory;

use std::fmt::Debug;

use async_trait::async_trait;
use sweets_core::{NewSweet, Sweet, SweetPatch};

use crate::error::StoreResult;

/// Catalog storage operations.
///
/// Implementations apply the stock rules defined on [`Sweet`]; field
/// validation is the caller's job.
#[async_trait]
pub trait SweetRepository: Send + Sync + Debug {
    /// Snapshot of every sweet in insertion order.
    async fn list(&self) -> StoreResult<Vec<Sweet>>;

    /// Looks up one sweet by id.
    async fn get(&self, id: &str) -> StoreResult<Option<Sweet>>;

    /// Assigns a fresh id and appends the sweet.
    async fn insert(&self, new: NewSweet) -> StoreResult<Sweet>;

    /// Merges a patch into an existing sweet.
    async fn update(&self, id: &str, patch: SweetPatch) -> StoreResult<Sweet>;

    /// Removes a sweet. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Sells one unit of a sweet.
    async fn purchase(&self, id: &str) -> StoreResult<Sweet>;

    /// Adds units to a sweet's stock.
    async fn restock(&self, id: &str, amount: i64) -> StoreResult<Sweet>;
}
