//! Console logging
//!
//! Logs go to stderr so `plan --format json` output stays machine-readable.
//! `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,syncplan=debug,syncplan_core=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
