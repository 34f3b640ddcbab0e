//! # Admin Page
//!
//! Inventory management: add, edit, restock and delete sweets.
//!
//! ## Dialog Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open_add() ─────────► Add      form empty         ─┐                  │
//! │  open_edit(id) ──────► Edit     form pre-filled    ─┼─► submit()       │
//! │  open_restock(id) ───► Restock  amount text        ─┘      │           │
//! │                                                            │           │
//! │           ┌───────────────────────────────────┬────────────┤           │
//! │           ▼                                   ▼            ▼           │
//! │   form text unparseable               facade error      success        │
//! │   toast "Error", dialog open          toast "Error",    toast          │
//! │                                       dialog open       "Success!",    │
//! │                                                         close dialog,  │
//! │                                                         reset form,    │
//! │                                                         reload         │
//! │                                                                         │
//! │  request_delete(id) ─► "Are you sure...?" ─► confirm_delete(yes/no)    │
//! │                                               no: nothing is called    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use sweets_core::validation::parse_whole_number;
use sweets_core::{CoreError, InventoryStats, Sweet, User};
use sweets_store::MockApi;
use tracing::{debug, info, warn};

use super::form::{FormField, SweetForm};
use super::{Mount, Route, LOAD_FAILED};
use crate::components::skeleton::render_table_skeleton;
use crate::components::sweet_table_row::{render_sweet_row, render_table_header, SweetRowProps};
use crate::error::ApiError;
use crate::state::{SessionContext, Toaster};

/// Prompt shown before a delete goes through.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this sweet?";

/// Shown when the store is empty.
pub const NO_SWEETS_YET: &str = "No sweets yet. Add your first sweet!";

/// The dialog currently open, with the sweet it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminDialog {
    Add,
    Edit(Sweet),
    Restock(Sweet),
}

impl AdminDialog {
    fn title(&self) -> String {
        match self {
            AdminDialog::Add => "Add New Sweet".to_string(),
            AdminDialog::Edit(sweet) => format!("Edit {}", sweet.name),
            AdminDialog::Restock(sweet) => format!("Restock {}", sweet.name),
        }
    }
}

/// Admin page controller.
#[derive(Debug)]
pub struct AdminPage {
    api: MockApi,
    session: SessionContext,
    toaster: Toaster,

    user: Option<User>,
    sweets: Vec<Sweet>,
    is_loading: bool,
    dialog: Option<AdminDialog>,
    form: SweetForm,
    restock_amount: String,
    pending_delete: Option<String>,
}

impl AdminPage {
    pub fn new(api: MockApi, session: SessionContext, toaster: Toaster) -> Self {
        AdminPage {
            api,
            session,
            toaster,
            user: None,
            sweets: Vec::new(),
            is_loading: true,
            dialog: None,
            form: SweetForm::default(),
            restock_amount: String::new(),
            pending_delete: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Guards the page, then loads the list.
    ///
    /// - No session: redirect to Login
    /// - Signed in but not admin: redirect to Dashboard
    pub async fn mount(&mut self) -> Mount {
        let Some(user) = self.session.current_user() else {
            debug!("Admin without session, redirecting to login");
            return Mount::Redirect(Route::Login);
        };

        if !user.is_admin {
            debug!(user_id = %user.id, "Non-admin on admin page, redirecting to dashboard");
            return Mount::Redirect(Route::Dashboard);
        }

        self.user = Some(user);
        self.load().await;
        Mount::Ready
    }

    /// Fetches the full list.
    pub async fn load(&mut self) {
        let start = Instant::now();
        self.is_loading = true;

        match self.api.get_sweets().await {
            Ok(sweets) => {
                self.sweets = sweets;
                debug!(
                    count = self.sweets.len(),
                    elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Admin loaded sweets"
                );
            }
            Err(e) => {
                warn!("Admin load failed: {}", e);
                self.toaster.error("Error", LOAD_FAILED);
            }
        }

        self.is_loading = false;
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    fn find(&self, id: &str) -> Option<Sweet> {
        self.sweets.iter().find(|s| s.id == id).cloned()
    }

    /// Opens the Add dialog with an empty form.
    pub fn open_add(&mut self) {
        self.form.reset();
        self.dialog = Some(AdminDialog::Add);
    }

    /// Opens the Edit dialog pre-filled from the loaded sweet.
    pub fn open_edit(&mut self, id: &str) -> Result<(), ApiError> {
        let sweet = self.find(id).ok_or_else(|| ApiError::from(CoreError::not_found(id)))?;
        self.form = SweetForm::from_sweet(&sweet);
        self.dialog = Some(AdminDialog::Edit(sweet));
        Ok(())
    }

    /// Opens the Restock dialog with an empty amount.
    pub fn open_restock(&mut self, id: &str) -> Result<(), ApiError> {
        let sweet = self.find(id).ok_or_else(|| ApiError::from(CoreError::not_found(id)))?;
        self.restock_amount.clear();
        self.dialog = Some(AdminDialog::Restock(sweet));
        Ok(())
    }

    /// Closes whatever is open and clears the form and selection.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.form.reset();
        self.restock_amount.clear();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_restock_amount(&mut self, value: impl Into<String>) {
        self.restock_amount = value.into();
    }

    /// Submits the open dialog. Does nothing when no dialog is open.
    pub async fn submit(&mut self) {
        match self.dialog.clone() {
            Some(AdminDialog::Add) => self.submit_add().await,
            Some(AdminDialog::Edit(sweet)) => self.submit_edit(&sweet.id).await,
            Some(AdminDialog::Restock(sweet)) => self.submit_restock(&sweet.id).await,
            None => {}
        }
    }

    async fn submit_add(&mut self) {
        let result = match self.form.to_new_sweet() {
            Ok(new) => self.api.create_sweet(new).await.map_err(ApiError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(sweet) => {
                info!(id = %sweet.id, "Admin added sweet");
                self.finish("Sweet added successfully").await;
            }
            Err(err) => self.fail("add", err),
        }
    }

    async fn submit_edit(&mut self, id: &str) {
        let result = match self.form.to_patch() {
            Ok(patch) => self.api.update_sweet(id, patch).await.map_err(ApiError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(_) => {
                info!(id = %id, "Admin updated sweet");
                self.finish("Sweet updated successfully").await;
            }
            Err(err) => self.fail("update", err),
        }
    }

    async fn submit_restock(&mut self, id: &str) {
        let result = match parse_whole_number("amount", &self.restock_amount) {
            Ok(amount) => self
                .api
                .restock_sweet(id, amount)
                .await
                .map_err(ApiError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(sweet) => {
                info!(id = %id, quantity = sweet.quantity, "Admin restocked sweet");
                self.finish("Sweet restocked successfully").await;
            }
            Err(err) => self.fail("restock", err),
        }
    }

    async fn finish(&mut self, message: &str) {
        self.toaster.success(message);
        self.close_dialog();
        self.load().await;
    }

    fn fail(&self, action: &str, err: ApiError) {
        warn!(action = %action, code = ?err.code, "Admin action failed: {}", err.message);
        self.toaster
            .error("Error", format!("Failed to {} sweet: {}", action, err.message));
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Starts a delete; nothing is removed until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: &str) -> &'static str {
        self.pending_delete = Some(id.to_string());
        DELETE_CONFIRMATION
    }

    /// Answers the confirmation prompt. Declining calls nothing.
    pub async fn confirm_delete(&mut self, confirmed: bool) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        if !confirmed {
            debug!(id = %id, "Delete cancelled");
            return;
        }

        match self.api.delete_sweet(&id).await {
            Ok(()) => {
                info!(id = %id, "Admin deleted sweet");
                self.toaster.success("Sweet deleted successfully");
                self.load().await;
            }
            Err(e) => self.fail("delete", e.into()),
        }
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

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn dialog(&self) -> Option<&AdminDialog> {
        self.dialog.as_ref()
    }

    pub fn form(&self) -> &SweetForm {
        &self.form
    }

    pub fn restock_amount(&self) -> &str {
        &self.restock_amount
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Summary counters over the loaded list.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_sweets(&self.sweets)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the whole page. An unmounted page renders nothing.
    pub fn render(&self) -> String {
        let Some(user) = &self.user else {
            return String::new();
        };

        let stats = self.stats();
        let mut out = format!(
            "Admin Panel | {}  [Back to Dashboard] (type `dashboard`)\n\n",
            user.name
        );
        out.push_str(&format!(
            "Total Products: {}   In Stock: {}   Out of Stock: {}\n\n",
            stats.total_products, stats.in_stock, stats.out_of_stock
        ));
        out.push_str("Inventory Management  [Add Sweet]\n");

        if self.is_loading {
            out.push_str(&render_table_skeleton());
        } else if self.sweets.is_empty() {
            out.push_str(NO_SWEETS_YET);
        } else {
            out.push_str(&render_table_header());
            for sweet in &self.sweets {
                out.push('\n');
                out.push_str(&render_sweet_row(SweetRowProps {
                    sweet,
                    is_admin: true,
                    is_purchasing: false,
                }));
            }
        }

        if let Some(dialog) = &self.dialog {
            out.push_str("\n\n");
            out.push_str(&self.render_dialog(dialog));
        }

        if self.pending_delete.is_some() {
            out.push_str(&format!("\n\n{} (yes/no)", DELETE_CONFIRMATION));
        }

        out
    }

    fn render_dialog(&self, dialog: &AdminDialog) -> String {
        let mut out = format!("── {} ──\n", dialog.title());
        match dialog {
            AdminDialog::Add | AdminDialog::Edit(_) => {
                for field in FormField::ALL {
                    out.push_str(&format!("  {:<12} {}\n", field.label(), self.form.get(field)));
                }
            }
            AdminDialog::Restock(sweet) => {
                out.push_str(&format!("  Current stock: {}\n", sweet.quantity));
                out.push_str(&format!("  {:<12} {}\n", "Amount", self.restock_amount));
            }
        }
        out.push_str("  [Save] [Cancel]");
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
