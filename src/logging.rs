//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `level` is an `EnvFilter` directive string (e.g. `info` or
/// `bookmark_classifier=debug,tower_http=info`); an invalid directive falls
/// back to `info`. `format` selects human-readable (`text`) or structured
/// (`json`) output.
pub fn init(level: &str, format: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
