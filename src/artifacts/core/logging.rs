use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "KNOWDIFF_LOG";

static INIT_ONCE: Once = Once::new();

/// Installs the global stderr subscriber; later calls are no-ops.
///
/// `KNOWDIFF_LOG` takes precedence over `verbose`, which only picks the
/// fallback level (`debug` instead of `warn`).
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let fallback = if verbose { "knowdiff=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        // another subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
