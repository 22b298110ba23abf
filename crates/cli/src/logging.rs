//! Stderr logging for a one-shot CLI run.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "aic=debug";

/// Install the global subscriber.
///
/// Filter precedence: `AIC_LOG` > `RUST_LOG` > default (`debug` for this
/// crate when `--verbose`, else `warn`). Logs go to stderr so command output
/// on stdout stays clean.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };

    let filter = std::env::var("AIC_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
