//! # Sweet Shop Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (file, then `SWEETS_*` overrides)
//! 2. Initialize tracing (stderr)
//! 3. Open the session file
//! 4. Build the in-memory MockApi
//! 5. Read commands until `quit` or end of input

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs so it can be tested
    if let Err(e) = sweet_shop_lib::run().await {
        eprintln!("sweet-shop: {}", e);
        std::process::exit(1);
    }
}
