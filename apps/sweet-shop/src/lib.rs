//! # Sweet Shop Library
//!
//! Core library for the Sweet Shop terminal application: a candy catalog
//! customers browse and buy from, and an admin panel for inventory.
//!
//! ## Module Organization
//! ```text
//! sweet_shop_lib/
//! ├── lib.rs          ◄─── You are here (startup & input loop)
//! ├── config.rs       ◄─── TOML file + SWEETS_* overrides
//! ├── error.rs        ◄─── ApiError for the UI, AppError for startup
//! ├── shell.rs        ◄─── Routing and command dispatch
//! ├── commands/
//! │   └── mod.rs      ◄─── Line parser
//! ├── pages/
//! │   ├── dashboard.rs◄─── Browse, filter, purchase
//! │   ├── admin.rs    ◄─── Add, edit, restock, delete
//! │   └── form.rs     ◄─── Add/Edit form fields
//! ├── components/
//! │   ├── sweet_card.rs       ◄─── Grid card
//! │   ├── sweet_table_row.rs  ◄─── Table row
//! │   └── skeleton.rs         ◄─── Loading placeholders
//! └── state/
//!     ├── session.rs  ◄─── Signed-in user
//!     └── toast.rs    ◄─── Notifications
//! ```

pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod shell;
pub mod state;

use std::io::Write;
use std::sync::Arc;

use sweets_store::{DemoAuthenticator, FileSessionStorage, InMemorySweetRepository, MockApi};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

use config::{AppConfig, DEFAULT_LOG_FILTER};
use error::AppResult;
use shell::{Flow, Shell};
use state::SessionContext;

/// Runs the application until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • <config dir>/sweet-shop.toml, then SWEETS_* overrides             │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber to stderr, filter from config                  │
/// │                                                                         │
/// │  3. Open Session Storage ─────────────────────────────────────────────► │
/// │     • JSON file in the platform data directory                          │
/// │                                                                         │
/// │  4. Build MockApi ────────────────────────────────────────────────────► │
/// │     • In-memory store, seeded unless seed_catalog = false               │
/// │                                                                         │
/// │  5. Read Commands ────────────────────────────────────────────────────► │
/// │     • One line at a time from stdin                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    let config = AppConfig::load(None)?;
    init_tracing(&config.log_filter);

    match &config.source {
        Some(path) => info!(?path, "Loaded config file"),
        None => debug!("No config file, using defaults"),
    }
    for rejected in &config.rejected_overrides {
        warn!("Ignoring environment override {}", rejected);
    }

    info!(latency = %config.latency, seed = config.seed_catalog, "Starting Sweet Shop");

    let session_path = config.resolved_session_path()?;
    info!(?session_path, "Session path determined");
    let session = SessionContext::new(Arc::new(FileSessionStorage::new(session_path)));

    let api = if config.seed_catalog {
        MockApi::demo(config.latency)
    } else {
        MockApi::new(
            Arc::new(InMemorySweetRepository::new()),
            Arc::new(DemoAuthenticator),
            config.latency,
        )
    };

    let mut shell = Shell::new(api, session);
    let input = BufReader::new(tokio::io::stdin());
    run_shell(&mut shell, input, &mut std::io::stdout()).await?;

    info!("Goodbye");
    Ok(())
}

/// Feeds lines from `input` to the shell, prompting before each one.
pub async fn run_shell<R, W>(shell: &mut Shell, input: R, out: &mut W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    shell.start(out).await?;

    let mut lines = input.lines();
    loop {
        write!(out, "sweet-shop:{}> ", shell.route())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            writeln!(out)?;
            break;
        };

        if shell.handle(&line, out).await? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the screen on stdout.
/// An invalid filter falls back to [`DEFAULT_LOG_FILTER`].
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweets_store::{Latency, MemorySessionStorage};

    fn shell() -> Shell {
        Shell::new(
            MockApi::demo(Latency::None),
            SessionContext::new(Arc::new(MemorySessionStorage::new())),
        )
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let mut shell = shell();
        let script: &[u8] = b"login shopper@example.com pw\ncategory Gummies\nbuy 2\nquit\nbuy 1\n";
        let mut out = Vec::new();

        run_shell(&mut shell, script, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("sweet-shop:login> "));
        assert!(text.contains("sweet-shop:dashboard> "));
        assert!(text.contains("Showing 2 of 6 sweets"));
        assert!(text.contains("Purchase failed: Out of stock"));
        // Nothing after `quit` runs.
        assert_eq!(shell.dashboard().sweets()[0].quantity, 45);
    }

    #[tokio::test]
    async fn test_end_of_input_stops_the_loop() {
        let mut shell = shell();
        let mut out = Vec::new();

        run_shell(&mut shell, &b"help"[..], &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Fields:"));
        assert!(text.ends_with('\n'));
    }
}
