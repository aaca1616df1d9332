//! Logging initialization.
//!
//! Events go to stderr so the report on stdout stays clean. `RUST_LOG`
//! selects the filter; without it the level is `warn`, or `debug` with
//! `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
