//! # Shell
//!
//! Routes between the Login screen, the dashboard and the admin page, and
//! dispatches parsed commands to the page that is showing.
//!
//! ## Command Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands::parse ──── ParseError ──► usage hint                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell::handle                                                         │
//! │       │  route check (e.g. `buy` only on the dashboard)                │
//! │       ▼                                                                 │
//! │  page action (await MockApi)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  print page, then drain and print toasts                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Navigating mounts a fresh page, so each visit reloads the list the way a
//! page mount does in a browser.

use std::io::{self, Write};

use sweets_core::User;
use sweets_store::{Latency, MockApi};
use tracing::{debug, info, warn};

use crate::commands::{self, Command};
use crate::error::ApiError;
use crate::pages::{AdminPage, DashboardPage, Mount, Route};
use crate::state::{SessionContext, Toaster};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const LOGIN_SCREEN: &str = "\
Sweet Shop | Sign in
  login <email> <password>
  register <email> <password> <name>
Any credentials work; an email containing \"admin\" signs in as admin.";

const HELP: &str = "\
Anywhere:   help, quit
Login:      login <email> <password>, register <email> <password> <name...>
Signed in:  logout, dashboard, admin, show, refresh
Dashboard:  search [text], category [name|all], categories, min [price],
            max [price], view grid|table, buy <id>
Admin:      add, edit <id>, restock <id>, set <field> <value>, amount <n>,
            save, cancel, delete <id>, yes, no
Fields:     name, category, price, quantity, description
Usage:      <command> --help";

/// The interactive front end.
#[derive(Debug)]
pub struct Shell {
    api: MockApi,
    session: SessionContext,
    toaster: Toaster,
    route: Route,
    dashboard: DashboardPage,
    admin: AdminPage,
}

impl Shell {
    pub fn new(api: MockApi, session: SessionContext) -> Self {
        let toaster = Toaster::new();
        Shell {
            dashboard: DashboardPage::new(api.clone(), session.clone(), toaster.clone()),
            admin: AdminPage::new(api.clone(), session.clone(), toaster.clone()),
            api,
            session,
            toaster,
            route: Route::Login,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn dashboard(&self) -> &DashboardPage {
        &self.dashboard
    }

    pub fn admin(&self) -> &AdminPage {
        &self.admin
    }

    /// Shows the first screen: the dashboard when a session survives from a
    /// previous run, the Login screen otherwise.
    pub async fn start<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.session.current_user().is_some() {
            let signed_in_at = self.session.signed_in_at();
            info!(signed_in_at = ?signed_in_at, "Resuming saved session");
            self.navigate(Route::Dashboard).await;
            if let Some(at) = signed_in_at {
                writeln!(out, "Signed in since {}", at.format("%Y-%m-%d %H:%M UTC"))?;
            }
        }
        self.print_screen(out)?;
        self.print_toasts(out)
    }

    /// Handles one input line.
    pub async fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match commands::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(command = ?command, route = %self.route, "Handling command");
        let flow = self.dispatch(command, out).await?;
        self.print_toasts(out)?;
        Ok(flow)
    }

    async fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match (self.route, command) {
            (_, Command::Quit) => return Ok(Flow::Quit),
            (_, Command::Help) => writeln!(out, "{}", HELP)?,

            // Login screen
            (Route::Login, Command::Login { email, password }) => {
                match self.api.login(&email, &password).await {
                    Ok(user) => self.sign_in(user, out).await?,
                    Err(e) => self.toaster.error("Login failed", ApiError::from(e).message),
                }
            }
            (Route::Login, Command::Register { email, password, name }) => {
                match self.api.register(&email, &password, &name).await {
                    Ok(user) => self.sign_in(user, out).await?,
                    Err(e) => self
                        .toaster
                        .error("Registration failed", ApiError::from(e).message),
                }
            }
            (Route::Login, Command::Show) => self.print_screen(out)?,
            (Route::Login, _) => writeln!(out, "Please sign in first. Type `help` for commands.")?,
            (_, Command::Login { .. } | Command::Register { .. }) => {
                writeln!(out, "Already signed in. Use `logout` first.")?
            }

            // Anywhere while signed in
            (_, Command::Logout) => {
                self.route = self.dashboard.logout();
                self.print_screen(out)?;
            }
            (_, Command::Dashboard) => self.go(Route::Dashboard, out).await?,
            (_, Command::Admin) => self.go(Route::Admin, out).await?,
            (_, Command::Show) => self.print_screen(out)?,
            (route, Command::Refresh) => {
                self.show_loading(route, out)?;
                match route {
                    Route::Dashboard => self.dashboard.load().await,
                    Route::Admin => self.admin.load().await,
                    Route::Login => {}
                }
                self.print_screen(out)?;
            }

            // Dashboard
            (Route::Dashboard, command) => self.dashboard_command(command, out).await?,

            // Admin
            (Route::Admin, command) => self.admin_command(command, out).await?,
        }

        Ok(Flow::Continue)
    }

    async fn dashboard_command<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let page = &mut self.dashboard;
        match command {
            Command::Search(text) => page.set_search(text),
            Command::Category(name) => page.set_category(&name),
            Command::Categories => {
                writeln!(out, "Categories: {}", page.categories().join(", "))?;
                return Ok(());
            }
            Command::MinPrice(text) => page.set_min_price(text),
            Command::MaxPrice(text) => page.set_max_price(text),
            Command::View(mode) => page.set_view_mode(mode),
            Command::Buy(id) => page.purchase(&id).await,
            other => {
                writeln!(out, "`{}` is only available on the admin page.", command_name(&other))?;
                return Ok(());
            }
        }
        self.print_screen(out)
    }

    async fn admin_command<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let page = &mut self.admin;
        match command {
            Command::Add => page.open_add(),
            Command::Edit(id) => {
                if let Err(e) = page.open_edit(&id) {
                    self.toaster.error("Error", e.message);
                }
            }
            Command::Restock(id) => {
                if let Err(e) = page.open_restock(&id) {
                    self.toaster.error("Error", e.message);
                }
            }
            Command::Set(field, value) => {
                if page.dialog().is_none() {
                    writeln!(out, "Open a dialog first (`add` or `edit <id>`).")?;
                    return Ok(());
                }
                page.set_field(field, value);
            }
            Command::Amount(value) => {
                if page.dialog().is_none() {
                    writeln!(out, "Open the restock dialog first (`restock <id>`).")?;
                    return Ok(());
                }
                page.set_restock_amount(value);
            }
            Command::Save => {
                if page.dialog().is_none() {
                    writeln!(out, "Nothing to save.")?;
                    return Ok(());
                }
                page.submit().await;
            }
            Command::Cancel => page.close_dialog(),
            Command::Delete(id) => {
                page.request_delete(&id);
            }
            Command::Yes | Command::No if page.pending_delete().is_none() => {
                writeln!(out, "Nothing to confirm.")?;
                return Ok(());
            }
            Command::Yes => page.confirm_delete(true).await,
            Command::No => page.confirm_delete(false).await,
            other => {
                writeln!(out, "`{}` is only available on the dashboard.", command_name(&other))?;
                return Ok(());
            }
        }
        self.print_screen(out)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    async fn sign_in<W: Write>(&mut self, user: User, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.session.sign_in(&user) {
            let err = ApiError::from(e);
            warn!("Could not store session: {}", err.message);
            self.toaster.error("Error", err.message);
            return Ok(());
        }
        self.go(Route::Dashboard, out).await
    }

    async fn go<W: Write>(&mut self, route: Route, out: &mut W) -> io::Result<()> {
        self.navigate(route).await;
        self.print_screen(out)
    }

    /// Mounts a fresh page for `route`, following guard redirects.
    async fn navigate(&mut self, route: Route) {
        let mut target = route;
        // Admin can bounce to Dashboard, which can bounce to Login.
        for _ in 0..3 {
            let mount = match target {
                Route::Login => Mount::Ready,
                Route::Dashboard => {
                    self.dashboard =
                        DashboardPage::new(self.api.clone(), self.session.clone(), self.toaster.clone());
                    self.dashboard.mount().await
                }
                Route::Admin => {
                    self.admin =
                        AdminPage::new(self.api.clone(), self.session.clone(), self.toaster.clone());
                    self.admin.mount().await
                }
            };

            match mount {
                Mount::Ready => break,
                Mount::Redirect(next) => {
                    debug!(from = %target, to = %next, "Redirected");
                    target = next;
                }
            }
        }
        self.route = target;
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn show_loading<W: Write>(&mut self, route: Route, out: &mut W) -> io::Result<()> {
        if self.api.latency() == Latency::None {
            return Ok(());
        }
        match route {
            Route::Dashboard => self.dashboard.begin_loading(),
            Route::Admin => self.admin.begin_loading(),
            Route::Login => return Ok(()),
        }
        self.print_screen(out)
    }

    fn print_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let screen = match self.route {
            Route::Login => LOGIN_SCREEN.to_string(),
            Route::Dashboard => self.dashboard.render(),
            Route::Admin => self.admin.render(),
        };
        writeln!(out, "{}", screen)
    }

    fn print_toasts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for toast in self.toaster.drain() {
            writeln!(out, "{}", toast)?;
        }
        Ok(())
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Login { .. } => "login",
        Command::Register { .. } => "register",
        Command::Logout => "logout",
        Command::Dashboard => "dashboard",
        Command::Admin => "admin",
        Command::Show => "show",
        Command::Refresh => "refresh",
        Command::Search(_) => "search",
        Command::Category(_) => "category",
        Command::Categories => "categories",
        Command::MinPrice(_) => "min",
        Command::MaxPrice(_) => "max",
        Command::View(_) => "view",
        Command::Buy(_) => "buy",
        Command::Add => "add",
        Command::Edit(_) => "edit",
        Command::Restock(_) => "restock",
        Command::Set(..) => "set",
        Command::Amount(_) => "amount",
        Command::Save => "save",
        Command::Cancel => "cancel",
        Command::Delete(_) => "delete",
        Command::Yes => "yes",
        Command::No => "no",
        Command::Help => "help",
        Command::Quit => "quit",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use sweets_store::MemorySessionStorage;

    fn shell() -> Shell {
        Shell::new(
            MockApi::demo(Latency::None),
            SessionContext::new(Arc::new(MemorySessionStorage::new())),
        )
    }

    async fn run(shell: &mut Shell, line: &str) -> String {
        let mut out = Vec::new();
        shell.handle(line, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_starts_on_login_without_session() {
        let mut shell = shell();
        let mut out = Vec::new();
        shell.start(&mut out).await.unwrap();

        assert_eq!(shell.route(), Route::Login);
        assert!(String::from_utf8(out).unwrap().contains("Sign in"));
    }

    #[tokio::test]
    async fn test_commands_before_login_are_refused() {
        let mut shell = shell();
        let out = run(&mut shell, "buy 1").await;
        assert!(out.contains("Please sign in first"));
        assert_eq!(shell.route(), Route::Login);
    }

    #[tokio::test]
    async fn test_login_lands_on_dashboard() {
        let mut shell = shell();
        let out = run(&mut shell, "login shopper@example.com pw").await;

        assert_eq!(shell.route(), Route::Dashboard);
        assert!(out.contains("Welcome, shopper"));
        assert_eq!(shell.dashboard().sweets().len(), 6);
    }

    #[tokio::test]
    async fn test_customer_cannot_open_admin() {
        let mut shell = shell();
        run(&mut shell, "login shopper@example.com pw").await;

        run(&mut shell, "admin").await;

        assert_eq!(shell.route(), Route::Dashboard);
    }

    #[tokio::test]
    async fn test_purchase_prints_toast() {
        let mut shell = shell();
        run(&mut shell, "login shopper@example.com pw").await;

        let out = run(&mut shell, "buy 2").await;
        assert!(out.contains("Purchase failed: Out of stock"));

        let out = run(&mut shell, "buy 1").await;
        assert!(out.contains("Success!: Sweet purchased successfully"));
        assert!(out.contains("44 left"));
    }

    #[tokio::test]
    async fn test_admin_flow() {
        let mut shell = shell();
        run(&mut shell, "login admin@example.com pw").await;
        run(&mut shell, "admin").await;
        assert_eq!(shell.route(), Route::Admin);

        run(&mut shell, "restock 1").await;
        run(&mut shell, "amount 10").await;
        let out = run(&mut shell, "save").await;
        assert!(out.contains("Sweet restocked successfully"));
        assert_eq!(shell.admin().sweets()[0].quantity, 55);

        let out = run(&mut shell, "delete 6").await;
        assert!(out.contains("Are you sure you want to delete this sweet?"));
        run(&mut shell, "no").await;
        assert_eq!(shell.admin().sweets().len(), 6);

        run(&mut shell, "delete 6").await;
        run(&mut shell, "yes").await;
        assert_eq!(shell.admin().sweets().len(), 5);

        // Changes are visible from the dashboard.
        run(&mut shell, "dashboard").await;
        assert_eq!(shell.dashboard().sweets().len(), 5);
        assert_eq!(shell.dashboard().sweets()[0].quantity, 55);
    }

    #[tokio::test]
    async fn test_misplaced_commands_get_a_hint() {
        let mut shell = shell();
        run(&mut shell, "login admin@example.com pw").await;

        let out = run(&mut shell, "add").await;
        assert!(out.contains("only available on the admin page"));

        run(&mut shell, "admin").await;
        let out = run(&mut shell, "buy 1").await;
        assert!(out.contains("only available on the dashboard"));
    }

    #[tokio::test]
    async fn test_logout_returns_to_login_and_forgets_session() {
        let mut shell = shell();
        run(&mut shell, "login admin@example.com pw").await;

        run(&mut shell, "logout").await;
        assert_eq!(shell.route(), Route::Login);

        run(&mut shell, "dashboard").await;
        assert_eq!(shell.route(), Route::Login);
    }

    #[tokio::test]
    async fn test_saved_session_resumes_on_start() {
        let storage = Arc::new(MemorySessionStorage::new());
        let session = SessionContext::new(storage.clone());
        let mut first = Shell::new(MockApi::demo(Latency::None), session);
        run(&mut first, "login admin@example.com pw").await;

        let mut second = Shell::new(
            MockApi::demo(Latency::None),
            SessionContext::new(storage),
        );
        let mut out = Vec::new();
        second.start(&mut out).await.unwrap();
        assert_eq!(second.route(), Route::Dashboard);
        assert!(String::from_utf8(out).unwrap().contains("Signed in since "));
    }

    #[tokio::test]
    async fn test_parse_errors_and_quit() {
        let mut shell = shell();
        let out = run(&mut shell, "dance").await;
        assert!(out.contains("Unknown command"));

        let mut out = Vec::new();
        assert_eq!(shell.handle("quit", &mut out).await.unwrap(), Flow::Quit);
    }
}
