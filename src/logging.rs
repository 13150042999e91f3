//! Logging bootstrap.
//!
//! Logs go to stderr so stdout stays clean for board output and `--json`.
//! `RUST_LOG` wins over the configured filter.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("projboard v{} logging ready", env!("CARGO_PKG_VERSION"));
    }
}
