//! Console logging setup for the analyzer CLI.

use tracing_subscriber::EnvFilter;

/// Initialize console logging. `RUST_LOG` overrides the default filter;
/// `verbose` switches the default from info to debug.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "debug,jtl_analyzer=debug"
    } else {
        "info,jtl_analyzer=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::debug!("🖥️ Console logging initialized");
}
