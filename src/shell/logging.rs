use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the fmt subscriber on stderr, filtered by `RUST_LOG`.
///
/// An unusable `RUST_LOG` falls back to `DEFAULT_LOG_FILTER` and is reported once tracing is up.
pub fn init_tracing() {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            std::env::var_os(EnvFilter::DEFAULT_ENV).map(|_| e),
        ),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(e) = rejected {
        tracing::warn!(
            error = %e,
            "ignoring invalid {}, using {DEFAULT_LOG_FILTER:?}",
            EnvFilter::DEFAULT_ENV
        );
    }
}
