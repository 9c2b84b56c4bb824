//! Tracing subscriber setup for binaries and ad-hoc debugging.

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, EnvFilter};

/// Build a formatted stderr subscriber without installing it.
///
/// `RUST_LOG` overrides `level` when set.
pub fn build_subscriber(level: Level) -> impl Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

/// Install [`build_subscriber`] as the global default.
///
/// Installing twice is not an error; the first subscriber stays in place.
pub fn init_logging(level: Level) {
    // Ignore error if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(build_subscriber(level));
}
