//! # Mock API Facade
//!
//! The async surface the pages call. Each method waits its simulated
//! latency, validates input, then acts on the injected repository.
//! Updates and restocks look the id up first, so an unknown id is reported
//! as not found whatever the input.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  api.restock_sweet("1", 10)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  latency.simulate(RestockSweet)    500 ms under the demo profile       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.get("1")                     None → "Sweet not found"            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_restock_amount(10)       Err → StoreError::Core(Validation)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.restock("1", 10)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(Sweet { quantity: 55, .. })                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::auth::{Authenticator, DemoAuthenticator};
use crate::error::{StoreError, StoreResult};
use crate::latency::{Latency, Operation};
use crate::repository::memory::InMemorySweetRepository;
use crate::repository::SweetRepository;
use sweets_core::validation::{validate_new_sweet, validate_patch, validate_restock_amount};
use sweets_core::{NewSweet, Sweet, SweetPatch, User};

/// Facade over the catalog store and the authenticator.
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct MockApi {
    sweets: Arc<dyn SweetRepository>,
    auth: Arc<dyn Authenticator>,
    latency: Latency,
}

impl MockApi {
    /// Creates a facade over explicit collaborators.
    pub fn new(
        sweets: Arc<dyn SweetRepository>,
        auth: Arc<dyn Authenticator>,
        latency: Latency,
    ) -> Self {
        MockApi {
            sweets,
            auth,
            latency,
        }
    }

    /// Seeded in-memory store plus the demo authenticator.
    pub fn demo(latency: Latency) -> Self {
        Self::new(
            Arc::new(InMemorySweetRepository::seeded()),
            Arc::new(DemoAuthenticator),
            latency,
        )
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        self.latency.simulate(Operation::Login).await;

        let user = self.auth.login(email, password).await?;
        info!(user_id = %user.id, is_admin = user.is_admin, "User logged in");
        Ok(user)
    }

    pub async fn register(&self, email: &str, password: &str, name: &str) -> StoreResult<User> {
        self.latency.simulate(Operation::Register).await;

        let user = self.auth.register(email, password, name).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every sweet, in insertion order.
    pub async fn get_sweets(&self) -> StoreResult<Vec<Sweet>> {
        self.latency.simulate(Operation::ListSweets).await;

        let sweets = self.sweets.list().await?;
        debug!(count = sweets.len(), "Listed sweets");
        Ok(sweets)
    }

    pub async fn get_sweet(&self, id: &str) -> StoreResult<Option<Sweet>> {
        self.latency.simulate(Operation::GetSweet).await;

        debug!(id = %id, "Getting sweet");
        self.sweets.get(id).await
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub async fn create_sweet(&self, new: NewSweet) -> StoreResult<Sweet> {
        self.latency.simulate(Operation::CreateSweet).await;

        validate_new_sweet(&new)?;
        let sweet = self.sweets.insert(new).await?;

        info!(id = %sweet.id, name = %sweet.name, "Created sweet");
        Ok(sweet)
    }

    pub async fn update_sweet(&self, id: &str, patch: SweetPatch) -> StoreResult<Sweet> {
        self.latency.simulate(Operation::UpdateSweet).await;

        self.require(id).await?;
        validate_patch(&patch)?;
        let sweet = self.sweets.update(id, patch).await?;

        info!(id = %id, "Updated sweet");
        Ok(sweet)
    }

    /// Removes a sweet. An unknown id is not an error.
    pub async fn delete_sweet(&self, id: &str) -> StoreResult<()> {
        self.latency.simulate(Operation::DeleteSweet).await;

        if self.sweets.delete(id).await? {
            info!(id = %id, "Deleted sweet");
        } else {
            debug!(id = %id, "Delete ignored, no such sweet");
        }
        Ok(())
    }

    /// Sells one unit.
    ///
    /// ## Errors
    /// - "Sweet not found" for an unknown id
    /// - "Out of stock" when the quantity is zero
    pub async fn purchase_sweet(&self, id: &str) -> StoreResult<Sweet> {
        self.latency.simulate(Operation::PurchaseSweet).await;

        let sweet = self.sweets.purchase(id).await?;
        info!(id = %id, remaining = sweet.quantity, "Purchased sweet");
        Ok(sweet)
    }

    pub async fn restock_sweet(&self, id: &str, amount: i64) -> StoreResult<Sweet> {
        self.latency.simulate(Operation::RestockSweet).await;

        self.require(id).await?;
        validate_restock_amount(amount)?;
        let sweet = self.sweets.restock(id, amount).await?;

        info!(id = %id, amount = amount, quantity = sweet.quantity, "Restocked sweet");
        Ok(sweet)
    }

    async fn require(&self, id: &str) -> StoreResult<()> {
        match self.sweets.get(id).await? {
            Some(_) => Ok(()),
            None => {
                debug!(id = %id, "No such sweet");
                Err(StoreError::not_found(id))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sweets_core::{CategoryFilter, CoreError, SweetFilter, ValidationError};

    fn api() -> MockApi {
        MockApi::demo(Latency::None)
    }

    fn new_sweet() -> NewSweet {
        NewSweet {
            name: "Peppermint Bark".to_string(),
            category: "Chocolate".to_string(),
            price_cents: 750,
            quantity: 12,
            description: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_purchase_out_of_stock_fails_and_keeps_quantity() {
        let api = api();

        let err = api.purchase_sweet("2").await.unwrap_err();

        assert_eq!(err.to_string(), "Out of stock");
        assert_eq!(api.get_sweet("2").await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_purchase_decrements_by_exactly_one() {
        let api = api();
        let before = api.get_sweet("1").await.unwrap().unwrap();

        let after = api.purchase_sweet("1").await.unwrap();

        assert_eq!(after.quantity, before.quantity - 1);
        assert_eq!(
            Sweet {
                quantity: before.quantity,
                ..after
            },
            before
        );
    }

    #[tokio::test]
    async fn test_purchase_unknown_is_not_found() {
        let err = api().purchase_sweet("42").await.unwrap_err();
        assert_eq!(err.to_string(), "Sweet not found");
    }

    #[tokio::test]
    async fn test_create_returns_fresh_id_and_grows_store() {
        let api = api();
        let before = api.get_sweets().await.unwrap();

        let created = api.create_sweet(new_sweet()).await.unwrap();

        let after = api.get_sweets().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|s| s.id != created.id));
        assert_eq!(after.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let api = api();
        let err = api
            .create_sweet(NewSweet {
                name: "  ".to_string(),
                ..new_sweet()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert_eq!(api.get_sweets().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_merges_and_validates() {
        let api = api();

        let updated = api
            .update_sweet(
                "3",
                SweetPatch {
                    price_cents: Some(999),
                    ..SweetPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price_cents, 999);
        assert_eq!(updated.name, "Caramel Fudge");

        let err = api
            .update_sweet(
                "3",
                SweetPatch {
                    quantity: Some(-1),
                    ..SweetPatch::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));

        let err = api
            .update_sweet("404", SweetPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_present_removes_exactly_it() {
        let api = api();

        api.delete_sweet("4").await.unwrap();

        let ids: Vec<String> = api.get_sweets().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "5", "6"]);
    }

    #[tokio::test]
    async fn test_delete_absent_is_silent_noop() {
        let api = api();
        let before = api.get_sweets().await.unwrap();

        api.delete_sweet("does-not-exist").await.unwrap();

        assert_eq!(api.get_sweets().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_restock_twice_is_additive() {
        let api = api();
        assert_eq!(api.restock_sweet("1", 10).await.unwrap().quantity, 55);
        assert_eq!(api.restock_sweet("1", 10).await.unwrap().quantity, 65);
    }

    #[tokio::test]
    async fn test_restock_rejects_non_positive_amount() {
        let api = api();
        assert!(api.restock_sweet("1", -50).await.is_err());
        assert!(api.restock_sweet("1", 0).await.is_err());
        assert_eq!(api.get_sweet("1").await.unwrap().unwrap().quantity, 45);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_before_validation() {
        let api = api();

        assert!(api.restock_sweet("missing", 10).await.unwrap_err().is_not_found());
        assert!(api.restock_sweet("missing", 0).await.unwrap_err().is_not_found());

        let err = api
            .update_sweet(
                "missing",
                SweetPatch {
                    quantity: Some(-1),
                    ..SweetPatch::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Sweet not found");
    }

    #[tokio::test]
    async fn test_gummies_scenario() {
        let two: Vec<Sweet> = api().get_sweets().await.unwrap().into_iter().take(2).collect();
        let api = MockApi::new(
            Arc::new(InMemorySweetRepository::with_sweets(two.clone())),
            Arc::new(DemoAuthenticator),
            Latency::None,
        );

        let filter = SweetFilter {
            category: CategoryFilter::from_selection("Gummies"),
            ..SweetFilter::default()
        };
        let visible = filter.apply(&api.get_sweets().await.unwrap());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        let err = api.purchase_sweet("2").await.unwrap_err();
        assert_eq!(err.to_string(), "Out of stock");
    }

    #[tokio::test]
    async fn test_login_role_from_email() {
        let api = api();
        assert!(api.login("admin@example.com", "pw").await.unwrap().is_admin);
        assert!(!api.login("shopper@example.com", "pw").await.unwrap().is_admin);
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let api = api();
        let other = api.clone();

        other.purchase_sweet("1").await.unwrap();

        assert_eq!(api.get_sweet("1").await.unwrap().unwrap().quantity, 44);
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_latency_applies_to_calls() {
        let api = MockApi::demo(Latency::Demo);
        let start = tokio::time::Instant::now();

        api.get_sweets().await.unwrap();

        assert!(start.elapsed() >= std::time::Duration::from_millis(500));
    }
}
