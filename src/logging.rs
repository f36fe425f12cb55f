use tracing::Level;

use std::str::FromStr;

/// Installs the global subscriber. Logs go to stderr so they never mix
/// with the interactive menu on stdout.
pub fn init_logging(level: &str) {
    let (max_level, rejected) = match Level::from_str(level.trim()) {
        Ok(level) => (level, false),
        Err(_) => (Level::INFO, true),
    };

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    if rejected {
        tracing::warn!("Unknown log level '{}', using 'info'", level);
    }
}

/// Runs `f` under a temporary stderr subscriber at `info`, for work that
/// happens before the configured level is known.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}
