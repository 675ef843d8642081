#![cfg(test)]

//! Logging for unit tests, installed once by the `ctor` hook in `lib.rs`.
//!
//! Level: `TEST_LOG`, then `RUST_LOG`, then `warn`. Output goes through the
//! test writer so `cargo test` captures it per test.
//!
//! ```bash
//! TEST_LOG=debug cargo test -p durak-backend services::sessions
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent; safe to call from any test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed; keep it.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
