//! Logging setup for keyhelp
//!
//! Logs go to stderr so the listing on stdout stays clean.
//! RUST_LOG wins over the configured level; `-v` raises the configured level.

use tracing_subscriber::{fmt, EnvFilter};

/// Level directive after applying `-v` repetitions to the configured level.
pub fn effective_level(configured: &str, verbose: u8) -> String {
    if verbose == 0 {
        return configured.to_string();
    }
    match verbose {
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
    .to_string()
}

/// Build the filter: RUST_LOG if set and valid, otherwise `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .try_init();
}
