use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr, keeping stdout free for reports.
///
/// `RUST_LOG` takes precedence; otherwise `quiet` drops the per-record
/// notices by raising the default level to `warn`. Does nothing if a
/// global subscriber is already installed.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("corpus_core={level},corpus_filter={level}")));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
