//! Diagnostic logging with `tracing`.
//!
//! Logs go to stderr so they never mix with answers on stdout.
//! `RUST_LOG` takes precedence over the `-v` flags.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Maps the number of `-v` flags to a default filter directive.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "chef_maestro=debug,warn",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(verbosity > 1);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
