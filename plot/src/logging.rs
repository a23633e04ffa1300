use tracing_subscriber::{fmt, EnvFilter};

/// Logs to stdout, filtered by `RUST_LOG` when set.
pub(crate) fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();
}
