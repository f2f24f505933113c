use tracing_subscriber::{EnvFilter, fmt};

/// Installs the fmt subscriber, filtered by `RUST_LOG` and defaulting to `info`.
/// Calling it again once a subscriber is set is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
