//! Test logging initialization shared by every test binary in the workspace.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a tracing subscriber for tests. Idempotent and race-safe.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `"engine=warn"`.
/// Output goes through `with_test_writer()` so cargo/nextest capture it, and
/// timestamps are suppressed to keep assertion logs stable across runs.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("engine=warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
