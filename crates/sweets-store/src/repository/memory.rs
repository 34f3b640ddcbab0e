//! # In-Memory Sweet Repository
//!
//! Vec-backed catalog store. Nothing survives the process.
//!
//! ## Id Assignment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert(new)                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  candidate = Utc::now() in Unix milliseconds                           │
//! │       │                                                                 │
//! │       ├── "1729260000000" unused?  ──► use it                          │
//! │       │                                                                 │
//! │       └── taken (two inserts in the same millisecond)                  │
//! │               candidate += 1, check again                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::SweetRepository;
use crate::error::{StoreError, StoreResult};
use crate::seed::demo_catalog;
use sweets_core::{NewSweet, Sweet, SweetPatch};

/// Catalog held in process memory.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InMemorySweetRepository::seeded();
/// let sweet = repo.purchase("1").await?;
/// assert_eq!(sweet.quantity, 44);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySweetRepository {
    sweets: RwLock<Vec<Sweet>>,
}

impl InMemorySweetRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given sweets, in order.
    pub fn with_sweets(sweets: Vec<Sweet>) -> Self {
        InMemorySweetRepository {
            sweets: RwLock::new(sweets),
        }
    }

    /// Creates a store holding the demo catalog.
    pub fn seeded() -> Self {
        Self::with_sweets(demo_catalog())
    }
}

/// Picks a timestamp id that no stored sweet already uses.
fn next_id(sweets: &[Sweet]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !sweets.iter().any(|s| s.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[async_trait]
impl SweetRepository for InMemorySweetRepository {
    async fn list(&self) -> StoreResult<Vec<Sweet>> {
        Ok(self.sweets.read().await.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Sweet>> {
        let sweets = self.sweets.read().await;
        Ok(sweets.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, new: NewSweet) -> StoreResult<Sweet> {
        let mut sweets = self.sweets.write().await;

        let id = next_id(&sweets);
        let sweet = Sweet::from_new(id, new);
        sweets.push(sweet.clone());

        debug!(id = %sweet.id, name = %sweet.name, "Inserted sweet");
        Ok(sweet)
    }

    async fn update(&self, id: &str, patch: SweetPatch) -> StoreResult<Sweet> {
        let mut sweets = self.sweets.write().await;
        let sweet = sweets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        sweet.apply_patch(patch);

        debug!(id = %id, "Updated sweet");
        Ok(sweet.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut sweets = self.sweets.write().await;
        let before = sweets.len();
        sweets.retain(|s| s.id != id);
        Ok(sweets.len() < before)
    }

    async fn purchase(&self, id: &str) -> StoreResult<Sweet> {
        let mut sweets = self.sweets.write().await;
        let sweet = sweets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        sweet.purchase_one()?;

        debug!(id = %id, remaining = sweet.quantity, "Purchased one unit");
        Ok(sweet.clone())
    }

    async fn restock(&self, id: &str, amount: i64) -> StoreResult<Sweet> {
        let mut sweets = self.sweets.write().await;
        let sweet = sweets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        sweet.restock(amount)?;

        debug!(id = %id, amount = amount, quantity = sweet.quantity, "Restocked sweet");
        Ok(sweet.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
