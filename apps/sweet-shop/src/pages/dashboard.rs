//! # Dashboard Page
//!
//! The customer view: browse, filter and purchase.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sweets ─────────┐                                                      │
//! │  filter ─────────┼──► refilter() ──► filtered   (rebuilt after every   │
//! │  (search,        │                               load and every filter  │
//! │   category,      │                               change)                │
//! │   min, max)      │                                                      │
//! │                                                                         │
//! │  is_loading      skeletons instead of sweets                           │
//! │  purchasing_id   that sweet's Purchase button is disabled              │
//! │  view_mode       grid (cards) | table (rows)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purchase Flow
//! 1. Mark the id as purchasing
//! 2. `api.purchase_sweet(id)`
//! 3. Toast "Success!" or "Purchase failed" with the error message
//! 4. Reload the list whatever the outcome
//! 5. Clear the marker

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use sweets_core::catalog::category_choices;
use sweets_core::{CategoryFilter, Sweet, SweetFilter, User, ALL_CATEGORIES};
use sweets_store::MockApi;
use tracing::{debug, info, warn};

use super::{Mount, Route, LOAD_FAILED};
use crate::components::skeleton::{render_card_grid_skeleton, render_table_skeleton};
use crate::components::sweet_card::{render_sweet_card, SweetCardProps};
use crate::components::sweet_table_row::{render_sweet_row, render_table_header, SweetRowProps};
use crate::error::ApiError;
use crate::state::{SessionContext, Toaster};

/// Shown when the filters leave nothing.
pub const NO_MATCHES: &str = "No sweets found matching your filters";

/// How the dashboard lays out sweets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" | "cards" => Ok(ViewMode::Grid),
            "table" | "list" => Ok(ViewMode::Table),
            other => Err(format!("unknown view '{}' (grid or table)", other)),
        }
    }
}

/// Dashboard page controller.
#[derive(Debug)]
pub struct DashboardPage {
    api: MockApi,
    session: SessionContext,
    toaster: Toaster,

    user: Option<User>,
    sweets: Vec<Sweet>,
    filtered: Vec<Sweet>,
    filter: SweetFilter,
    view_mode: ViewMode,
    is_loading: bool,
    purchasing_id: Option<String>,
}

impl DashboardPage {
    /// A page that has not mounted yet; it starts in the loading state.
    pub fn new(api: MockApi, session: SessionContext, toaster: Toaster) -> Self {
        DashboardPage {
            api,
            session,
            toaster,
            user: None,
            sweets: Vec::new(),
            filtered: Vec::new(),
            filter: SweetFilter::default(),
            view_mode: ViewMode::Grid,
            is_loading: true,
            purchasing_id: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Reads the session and loads the list.
    ///
    /// Without a session the page redirects to Login and loads nothing.
    pub async fn mount(&mut self) -> Mount {
        match self.session.current_user() {
            Some(user) => {
                debug!(user_id = %user.id, "Dashboard mounted");
                self.user = Some(user);
                self.load().await;
                Mount::Ready
            }
            None => {
                debug!("Dashboard without session, redirecting to login");
                Mount::Redirect(Route::Login)
            }
        }
    }

    /// Fetches the full list.
    pub async fn load(&mut self) {
        let start = Instant::now();
        self.is_loading = true;

        match self.api.get_sweets().await {
            Ok(sweets) => {
                self.sweets = sweets;
                self.refilter();
                debug!(
                    count = self.sweets.len(),
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Dashboard loaded sweets"
                );
            }
            Err(e) => {
                warn!("Dashboard load failed: {}", e);
                self.toaster.error("Error", LOAD_FAILED);
            }
        }

        self.is_loading = false;
    }

    /// Marks the page as loading so a skeleton can be shown before the
    /// next [`load`](Self::load).
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Ends the session. The caller routes to Login.
    pub fn logout(&mut self) -> Route {
        if let Err(e) = self.session.sign_out() {
            let err = ApiError::from(e);
            self.toaster.error("Error", err.message);
        }
        self.user = None;
        Route::Login
    }

    // =========================================================================
    // Filters
    // =========================================================================

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.sweets);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
        self.refilter();
    }

    /// Selects a category; `"all"` clears the category filter.
    pub fn set_category(&mut self, selection: &str) {
        self.filter.category = CategoryFilter::from_selection(selection);
        self.refilter();
    }

    pub fn set_min_price(&mut self, text: impl Into<String>) {
        self.filter.min_price = text.into();
        self.refilter();
    }

    pub fn set_max_price(&mut self, text: impl Into<String>) {
        self.filter.max_price = text.into();
        self.refilter();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Selector entries: `"all"` then each category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        category_choices(&self.sweets)
    }

    /// True when no category filter is active.
    pub fn showing_all_categories(&self) -> bool {
        self.filter.category.as_selection() == ALL_CATEGORIES
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Buys one unit of `id`.
    pub async fn purchase(&mut self, id: &str) {
        let start = Instant::now();
        self.purchasing_id = Some(id.to_string());

        match self.api.purchase_sweet(id).await {
            Ok(sweet) => {
                info!(
                    id = %id,
                    remaining = sweet.quantity,
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Dashboard purchase succeeded"
                );
                self.toaster.success("Sweet purchased successfully");
            }
            Err(e) => {
                let err = ApiError::from(e);
                warn!(id = %id, code = ?err.code, "Dashboard purchase failed");
                self.toaster.error("Purchase failed", err.message);
            }
        }

        self.load().await;
        self.purchasing_id = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn sweets(&self) -> &[Sweet] {
        &self.sweets
    }

    /// The list after filtering, in store order.
    pub fn filtered(&self) -> &[Sweet] {
        &self.filtered
    }

    pub fn filter(&self) -> &SweetFilter {
        &self.filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn purchasing_id(&self) -> Option<&str> {
        self.purchasing_id.as_deref()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the whole page. An unmounted page renders nothing.
    pub fn render(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };

        let mut out = String::new();
        out.push_str(&format!("Sweet Shop | Welcome, {}\n", user.name));
        if user.is_admin {
            out.push_str("[Admin Panel] (type `admin`)  ");
        }
        out.push_str("[Logout]\n\n");

        let category = match &self.filter.category {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Named(name) => name.as_str(),
        };
        out.push_str(&format!("Browse Sweets  (view: {})\n", self.view_mode));
        out.push_str(&format!(
            "Search: \"{}\"  Category: {}  Min: {}  Max: {}\n\n",
            self.filter.search,
            category,
            placeholder(&self.filter.min_price, "0.00"),
            placeholder(&self.filter.max_price, "99.99"),
        ));

        out.push_str(&self.render_body());
        out
    }

    fn render_body(&self) -> String {
        if self.is_loading {
            return match self.view_mode {
                ViewMode::Grid => render_card_grid_skeleton(),
                ViewMode::Table => render_table_skeleton(),
            };
        }

        if self.filtered.is_empty() {
            return NO_MATCHES.to_string();
        }

        let is_purchasing = |sweet: &Sweet| self.purchasing_id.as_deref() == Some(sweet.id.as_str());
        let body = match self.view_mode {
            ViewMode::Grid => self
                .filtered
                .iter()
                .map(|sweet| {
                    render_sweet_card(SweetCardProps {
                        sweet,
                        is_purchasing: is_purchasing(sweet),
                    })
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ViewMode::Table => {
                let mut table = render_table_header();
                for sweet in &self.filtered {
                    table.push('\n');
                    table.push_str(&render_sweet_row(SweetRowProps {
                        sweet,
                        is_admin: false,
                        is_purchasing: is_purchasing(sweet),
                    }));
                }
                table
            }
        };

        format!(
            "{}\n\nShowing {} of {} sweets",
            body,
            self.filtered.len(),
            self.sweets.len()
        )
    }
}

fn placeholder<'a>(value: &'a str, empty: &'a str) -> &'a str {
    if value.is_empty() {
        empty
    } else {
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastVariant;
    use std::sync::Arc;
    use sweets_store::{Latency, MemorySessionStorage};

    fn shopper() -> User {
        User {
            id: "1".to_string(),
            email: "shopper@example.com".to_string(),
            name: "shopper".to_string(),
            is_admin: false,
        }
    }

    fn page_with(user: Option<User>) -> (DashboardPage, Toaster) {
        let session = SessionContext::new(Arc::new(MemorySessionStorage::new()));
        if let Some(user) = user {
            session.sign_in(&user).unwrap();
        }
        let toaster = Toaster::new();
        let page = DashboardPage::new(MockApi::demo(Latency::None), session, toaster.clone());
        (page, toaster)
    }

    async fn mounted() -> (DashboardPage, Toaster) {
        let (mut page, toaster) = page_with(Some(shopper()));
        assert_eq!(page.mount().await, Mount::Ready);
        (page, toaster)
    }

    #[tokio::test]
    async fn test_mount_without_session_redirects_to_login() {
        let (mut page, _) = page_with(None);
        assert_eq!(page.mount().await, Mount::Redirect(Route::Login));
        assert!(page.sweets().is_empty());
        assert_eq!(page.render(), "");
    }

    #[tokio::test]
    async fn test_mount_loads_everything() {
        let (page, _) = mounted().await;
        assert!(!page.is_loading());
        assert_eq!(page.sweets().len(), 6);
        assert_eq!(page.filtered().len(), 6);
        assert_eq!(page.view_mode(), ViewMode::Grid);
    }

    #[tokio::test]
    async fn test_filters_recompute_on_change() {
        let (mut page, _) = mounted().await;

        page.set_category("Gummies");
        assert_eq!(page.filtered().len(), 2);

        page.set_search("sour");
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].name, "Sour Worms");

        page.set_search("");
        page.set_category("all");
        page.set_max_price("5");
        assert!(page.showing_all_categories());
        assert_eq!(page.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_categories() {
        let (page, _) = mounted().await;
        assert_eq!(
            page.categories(),
            vec!["all", "Chocolate", "Gummies", "Fudge", "Hard Candy", "Lollipops"]
        );
    }

    #[tokio::test]
    async fn test_purchase_success_toasts_and_reloads() {
        let (mut page, toaster) = mounted().await;

        page.purchase("1").await;

        let toasts = toaster.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Success!");
        assert_eq!(toasts[0].description, "Sweet purchased successfully");
        assert_eq!(page.sweets()[0].quantity, 44);
        assert_eq!(page.purchasing_id(), None);
    }

    #[tokio::test]
    async fn test_purchase_out_of_stock_toasts_error() {
        let (mut page, toaster) = mounted().await;

        page.purchase("2").await;

        let toasts = toaster.drain();
        assert_eq!(toasts[0].title, "Purchase failed");
        assert_eq!(toasts[0].description, "Out of stock");
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
        assert_eq!(page.sweets()[1].quantity, 0);
        assert_eq!(page.purchasing_id(), None);
    }

    #[tokio::test]
    async fn test_filtered_list_follows_reload() {
        let (mut page, _) = mounted().await;
        page.set_min_price("12");

        page.purchase("1").await;

        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].quantity, 44);
    }

    #[tokio::test]
    async fn test_render_grid_and_table() {
        let (mut page, _) = mounted().await;

        let grid = page.render();
        assert!(grid.contains("Welcome, shopper"));
        assert!(!grid.contains("Admin Panel"));
        assert!(grid.contains("45 left"));
        assert!(grid.contains("Showing 6 of 6 sweets"));

        page.set_view_mode(ViewMode::Table);
        let table = page.render();
        assert!(table.contains("Category"));
        assert!(table.contains("$3.99"));
    }

    #[tokio::test]
    async fn test_render_empty_and_loading_states() {
        let (mut page, _) = mounted().await;

        page.set_search("licorice");
        assert!(page.render().contains(NO_MATCHES));

        page.begin_loading();
        let loading = page.render();
        assert!(loading.contains('░'));
        assert!(!loading.contains(NO_MATCHES));
    }

    #[tokio::test]
    async fn test_admin_sees_admin_panel_hint() {
        let admin = User {
            is_admin: true,
            name: "admin".to_string(),
            ..shopper()
        };
        let (mut page, _) = page_with(Some(admin));
        page.mount().await;
        assert!(page.render().contains("Admin Panel"));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (mut page, _) = mounted().await;

        assert_eq!(page.logout(), Route::Login);

        assert!(page.user().is_none());
        assert_eq!(page.mount().await, Mount::Redirect(Route::Login));
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("table".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert_eq!("GRID".parse::<ViewMode>().unwrap(), ViewMode::Grid);
        assert!("carousel".parse::<ViewMode>().is_err());
    }
}
