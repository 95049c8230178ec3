use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global fmt subscriber filtered by `directive`.
///
/// Falls back to `info` when the directive does not parse. Calling it twice is
/// harmless; the second install is ignored.
pub fn init_tracing(directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(directive)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
