//! Log subscriber setup. Logs go to stderr so session output stays clean.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins; otherwise the filter comes from the `-v` count, then the
/// config file, then `warn`.
pub fn init(verbose: u8, configured: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(verbose, configured);
            EnvFilter::try_new(&directive)
                .with_context(|| format!("invalid log filter: {}", directive))?
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("failed to install log subscriber")
}

pub(crate) fn filter_directive(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(configured)) => configured.to_string(),
        (0, None) => "warn".to_string(),
        (1, _) => "memo=info".to_string(),
        (2, _) => "memo=debug".to_string(),
        _ => "memo=trace".to_string(),
    }
}
