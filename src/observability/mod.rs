//! Tracing initialization.
//!
//! Sets up a `tracing-subscriber` fmt pipeline with an env-filter. The level
//! comes from the configuration, overridable through `RUST_LOG` as usual.
//! Observability is optional: initialization failures are swallowed so a
//! host that already installed a subscriber keeps it.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `level` is a tracing directive (`trace`, `debug`, `info`, `warn`,
/// `error`); `None` defaults to `info`. `RUST_LOG` takes precedence when set.
///
/// Idempotent: only the first successful call installs a subscriber; later
/// calls (or an already-installed global subscriber) are silently ignored.
///
/// # Example
///
/// ```
/// bientrack::observability::init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
