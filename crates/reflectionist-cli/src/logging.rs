//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when none is given or the given one does not parse.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `tracing` subscriber filtered by `directive`.
///
/// Logs never go to stdout, which carries command output. Calling this twice is
/// harmless: the second subscriber is discarded.
pub fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
