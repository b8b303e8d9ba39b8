//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Crate target receiving log output
const CRATE_TARGET: &str = "burg2d";

/// Filter directive for the given verbosity
///
/// Mapping:
/// - `quiet`      -> warn
/// - 0 (none)     -> info
/// - 1 (-v)       -> debug (per-order coefficients)
/// - 2+ (-vv)     -> trace
pub fn default_directive(verbosity: u8, quiet: bool) -> String {
    let level = match (quiet, verbosity) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    format!("{CRATE_TARGET}={level}")
}

/// Initialize tracing on stderr
///
/// `RUST_LOG` overrides the verbosity flags if set. Calling this more than
/// once keeps the first subscriber.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
