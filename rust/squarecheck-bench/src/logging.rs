//! `tracing` subscriber setup. Logs go to stderr; stdout carries only the
//! report.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count. `RUST_LOG` overrides it.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "squarecheck=warn",
        1 => "squarecheck=info",
        _ => "squarecheck=debug",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
