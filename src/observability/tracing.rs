//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter directive.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    // A subscriber may already be set (tests, embedding); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
