//! Shared test setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Load the local `.env` file and install a tracing subscriber honoring
/// `RUST_LOG`. Safe to call from every test.
pub fn setup_test() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}
