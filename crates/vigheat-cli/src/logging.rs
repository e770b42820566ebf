// crates/vigheat-cli/src/logging.rs
//
// Diagnostics go to stderr through tracing; RUST_LOG overrides the default
// "warn" level. Operator-facing output stays on stdout.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
