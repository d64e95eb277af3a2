use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging/tracing subsystem.
///
/// Everything goes to stderr; stdout is reserved for the extracted version.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("openaptx_version=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("openaptx_version=warn"))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
